//! Generalized search algorithms for finding a path across a state space.
//!
//! To use these search algorithms, implement the trait [StateSpace]
//! (and [SearchHeuristic] for A*), then hand the space to one of
//! [dfs], [bfs], [ucs] or [astar].

pub mod algorithm;
mod errors;
pub mod frontier;
mod node;
pub mod reached;
mod solution;
mod traits;

#[cfg(test)]
pub(crate) mod helpers;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use node::{Ancestors, Node};
pub use solution::{NoSolution, Outcome, ReachedMap, Solution};
pub use traits::Cost;
pub use traits::SearchHeuristic;
pub use traits::StateSpace;

pub use algorithm::astar::astar;
pub use algorithm::basic::{bfs, dfs};
pub use algorithm::ucs::ucs;
pub use algorithm::Algorithm;
