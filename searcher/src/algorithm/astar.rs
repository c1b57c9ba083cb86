use super::{Prioritize, SearchAlgorithm};
use crate::errors::{Result, SearchError};
use crate::frontier::PriorityFrontier;
use crate::node::Node;
use crate::reached::BestCost;
use crate::solution::Outcome;
use crate::traits::{Cost, SearchHeuristic, StateSpace};

/// Orders the frontier by the cost so far plus the
/// estimated cost still to go.
#[derive(Debug)]
pub struct Estimate;

impl<G> Prioritize<G> for Estimate
where
    G: SearchHeuristic,
{
    fn priority(space: &G, node: &Node<G::State, G::Action>) -> Result<Cost> {
        node.cost()
            .checked_add(space.heuristic(node.state()))
            .ok_or_else(|| SearchError::CostOverflow(format!("{:?}", node.state())))
    }
}

pub type AStarSearch<'s, G> = SearchAlgorithm<
    's,
    G,
    PriorityFrontier<<G as StateSpace>::State, <G as StateSpace>::Action>,
    BestCost<<G as StateSpace>::State>,
    Estimate,
>;

pub fn build<G>(space: &G) -> AStarSearch<'_, G>
where
    G: SearchHeuristic,
{
    SearchAlgorithm::new(space)
}

/// A* search, guided by [SearchHeuristic::heuristic].
///
/// The path is the cheapest one as long as the heuristic never
/// overestimates. With a consistent heuristic no state needs to be
/// expanded twice.
pub fn astar<G>(space: &G) -> Result<Outcome<G::State, G::Action>>
where
    G: SearchHeuristic,
{
    build(space).run()
}
