pub use bfs::bfs;
pub use dfs::dfs;

use super::Prioritize;
use crate::errors::Result;
use crate::node::Node;
use crate::traits::{Cost, StateSpace};

/// Uninformed searches don't order their frontier.
#[derive(Debug)]
pub struct Unprioritized;

impl<G> Prioritize<G> for Unprioritized
where
    G: StateSpace,
{
    fn priority(_space: &G, _node: &Node<G::State, G::Action>) -> Result<Cost> {
        Ok(0)
    }
}

mod bfs {
    use super::Unprioritized;
    use crate::algorithm::SearchAlgorithm;
    use crate::errors::Result;
    use crate::frontier::QueueFrontier;
    use crate::reached::Discovered;
    use crate::solution::Outcome;
    use crate::traits::StateSpace;

    pub type BreadthFirstSearch<'s, G> = SearchAlgorithm<
        's,
        G,
        QueueFrontier<<G as StateSpace>::State, <G as StateSpace>::Action>,
        Discovered<<G as StateSpace>::State>,
        Unprioritized,
    >;

    pub fn build<G>(space: &G) -> BreadthFirstSearch<'_, G>
    where
        G: StateSpace,
    {
        SearchAlgorithm::new(space)
    }

    /// Breadth-first search, which expands states in the order
    /// they were discovered.
    ///
    /// The path found has the fewest steps, which is only the
    /// cheapest path when every step costs the same.
    pub fn bfs<G>(space: &G) -> Result<Outcome<G::State, G::Action>>
    where
        G: StateSpace,
    {
        build(space).run()
    }
}

mod dfs {
    use super::Unprioritized;
    use crate::algorithm::SearchAlgorithm;
    use crate::errors::Result;
    use crate::frontier::StackFrontier;
    use crate::reached::Expanded;
    use crate::solution::Outcome;
    use crate::traits::StateSpace;

    pub type DepthFirstSearch<'s, G> = SearchAlgorithm<
        's,
        G,
        StackFrontier<<G as StateSpace>::State, <G as StateSpace>::Action>,
        Expanded<<G as StateSpace>::State>,
        Unprioritized,
    >;

    pub fn build<G>(space: &G) -> DepthFirstSearch<'_, G>
    where
        G: StateSpace,
    {
        SearchAlgorithm::new(space)
    }

    /// Depth-first search, which always expands the most
    /// recently discovered state.
    ///
    /// The reached map holds expanded states only. No guarantee
    /// is made about the cost of the path found.
    pub fn dfs<G>(space: &G) -> Result<Outcome<G::State, G::Action>>
    where
        G: StateSpace,
    {
        build(space).run()
    }
}
