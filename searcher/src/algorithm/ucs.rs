use super::{Prioritize, SearchAlgorithm};
use crate::errors::Result;
use crate::frontier::PriorityFrontier;
use crate::node::Node;
use crate::reached::BestCost;
use crate::solution::Outcome;
use crate::traits::{Cost, StateSpace};

/// Orders the frontier by the cost accumulated so far.
#[derive(Debug)]
pub struct PathCost;

impl<G> Prioritize<G> for PathCost
where
    G: StateSpace,
{
    fn priority(_space: &G, node: &Node<G::State, G::Action>) -> Result<Cost> {
        Ok(node.cost())
    }
}

/// Search algorithm which always expands the cheapest path found so far.
pub type UniformCostSearch<'s, G> = SearchAlgorithm<
    's,
    G,
    PriorityFrontier<<G as StateSpace>::State, <G as StateSpace>::Action>,
    BestCost<<G as StateSpace>::State>,
    PathCost,
>;

/// Build a uniform-cost searcher
pub fn build<G>(space: &G) -> UniformCostSearch<'_, G>
where
    G: StateSpace,
{
    SearchAlgorithm::new(space)
}

/// Perform a uniform-cost search (Dijkstra's algorithm).
///
/// Uniform-cost search behaves like a breadth first search, but always
/// expands the cheapest path even when steps have varying costs. The end
/// is only accepted once it comes off the frontier, at which point no
/// cheaper path to it can remain.
pub fn ucs<G>(space: &G) -> Result<Outcome<G::State, G::Action>>
where
    G: StateSpace,
{
    build(space).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Lattice;

    #[test]
    fn takes_the_detour() {
        let lattice: Lattice = "
            S9E
            ...
        "
        .parse()
        .unwrap();

        let solution = ucs(&lattice).unwrap().solved().unwrap();
        assert_eq!(solution.actions(), vec!['D', 'R', 'R', 'U']);
        assert_eq!(solution.cost(), 4);
    }

    #[test]
    fn keeps_the_first_cheaper_discovery() {
        // (1, 0) is rediscovered from below at 7, but keeps its cost of 5.
        let lattice: Lattice = "
            S5.
            ...
            ..E
        "
        .parse()
        .unwrap();

        let solution = ucs(&lattice).unwrap().solved().unwrap();
        assert_eq!(solution.cost(), 4);
        assert_eq!(solution.reached().get(&(1, 0)), Some(&5));
        assert_eq!(solution.reached().get(&(2, 0)), Some(&4));
    }

    #[test]
    fn reached_costs_are_the_best_known() {
        let lattice: Lattice = "
            S1111
            3###1
            1111E
        "
        .parse()
        .unwrap();

        let solution = ucs(&lattice).unwrap().solved().unwrap();
        assert_eq!(solution.cost(), 6);
        assert_eq!(solution.reached()[&(0, 0)], 0);
        assert_eq!(solution.reached()[&(4, 0)], 4);
        assert_eq!(solution.reached()[&(0, 1)], 3);
    }
}
