//! Terminal results of a search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::errors::{Result, SearchError};
use crate::node::Node;
use crate::traits::Cost;

/// Every state a search recorded, with the best cost known for it.
pub type ReachedMap<S> = HashMap<S, Cost>;

/// A path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A>
where
    S: Eq + Hash,
{
    node: Node<S, A>,
    reached: ReachedMap<S>,
}

impl<S, A> Solution<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    pub(crate) fn new(node: Node<S, A>, reached: ReachedMap<S>) -> Self {
        Self { node, reached }
    }

    /// The node at the end of the path.
    pub fn node(&self) -> &Node<S, A> {
        &self.node
    }

    /// Total cost of the path.
    pub fn cost(&self) -> Cost {
        self.node.cost()
    }

    /// States along the path, from the start to the end.
    pub fn states(&self) -> Vec<S> {
        self.node.states()
    }

    /// Actions along the path, from the start to the end.
    pub fn actions(&self) -> Vec<A> {
        self.node.actions()
    }

    /// Number of steps taken along the path.
    pub fn len(&self) -> usize {
        self.node.depth()
    }

    /// True when the start was already the end.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reached(&self) -> &ReachedMap<S> {
        &self.reached
    }
}

/// The search ran out of places to look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolution<S>
where
    S: Eq + Hash,
{
    reached: ReachedMap<S>,
}

impl<S> NoSolution<S>
where
    S: Eq + Hash,
{
    pub(crate) fn new(reached: ReachedMap<S>) -> Self {
        Self { reached }
    }

    pub fn reached(&self) -> &ReachedMap<S> {
        &self.reached
    }
}

/// Either outcome of a search. Running out of states is a
/// normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S, A>
where
    S: Eq + Hash,
{
    Solution(Solution<S, A>),
    NoSolution(NoSolution<S>),
}

impl<S, A> Outcome<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    pub fn is_solution(&self) -> bool {
        matches!(self, Outcome::Solution(_))
    }

    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            Outcome::Solution(solution) => Some(solution),
            Outcome::NoSolution(_) => None,
        }
    }

    /// States examined by the search, whichever way it ended.
    pub fn reached(&self) -> &ReachedMap<S> {
        match self {
            Outcome::Solution(solution) => solution.reached(),
            Outcome::NoSolution(failure) => failure.reached(),
        }
    }

    /// Treat a missing path as an error.
    pub fn solved(self) -> Result<Solution<S, A>> {
        match self {
            Outcome::Solution(solution) => Ok(solution),
            Outcome::NoSolution(failure) => Err(SearchError::NoResultFound {
                explored: failure.reached().len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn solution() {
        let root = Rc::new(Node::root((0, 0)));
        let end = Node::extend(root, 'R', (1, 0), 3);
        let reached: ReachedMap<(i32, i32)> = vec![((0, 0), 0), ((1, 0), 3)].into_iter().collect();

        let outcome = Outcome::Solution(Solution::new(end, reached));
        assert!(outcome.is_solution());
        assert_eq!(outcome.reached().len(), 2);

        let solution = outcome.solved().unwrap();
        assert_eq!(solution.cost(), 3);
        assert_eq!(solution.len(), 1);
        assert!(!solution.is_empty());
        assert_eq!(solution.states(), vec![(0, 0), (1, 0)]);
        assert_eq!(solution.actions(), vec!['R']);
    }

    #[test]
    fn no_solution() {
        let reached: ReachedMap<u32> = vec![(0, 0), (1, 1), (2, 2)].into_iter().collect();
        let outcome: Outcome<u32, char> = Outcome::NoSolution(NoSolution::new(reached));

        assert!(!outcome.is_solution());
        assert!(outcome.solution().is_none());
        assert_eq!(outcome.reached().len(), 3);

        match outcome.solved() {
            Err(SearchError::NoResultFound { explored }) => assert_eq!(explored, 3),
            other => panic!("Expected no result, got {:?}", other),
        }
    }
}
