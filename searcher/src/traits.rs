use std::fmt::Debug;
use std::hash::Hash;

/// Accumulated path cost, and the cost of entering a single state.
pub type Cost = usize;

/// Describes a space which can be searched for a path
/// between a starting state and an ending state.
///
/// Spaces are never mutated by a search, so a single space
/// can be handed to any number of searches.
pub trait StateSpace {
    /// Identity of a location in the space. Visited checks
    /// are done on states alone.
    type State: Debug + Clone + Eq + Hash;

    /// The move which leads from one state to a neighbour.
    type Action: Debug + Clone;

    /// Where every search begins.
    fn start(&self) -> Self::State;

    /// Where every search is trying to get to.
    fn end(&self) -> Self::State;

    /// Has the search arrived?
    fn is_end(&self, state: &Self::State) -> bool {
        *state == self.end()
    }

    /// All states reachable in one step from `state`, keyed
    /// by the action which reaches them.
    ///
    /// The order should be stable so that searches are reproducible.
    fn neighbours(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// The cost of entering `state`. Must be positive.
    fn cost(&self, state: &Self::State) -> Cost;
}

/// An interface for searching when a heuristic can be provided.
///
/// The heuristic should be the best guess at the remaining
/// cost to reach the end of the space. It must never overestimate
/// for A* to return an optimal path.
pub trait SearchHeuristic: StateSpace {
    fn heuristic(&self, state: &Self::State) -> Cost;
}
