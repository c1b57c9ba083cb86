//! Bookkeeping of the states a search has already dealt with.
//!
//! Uninformed searches only need to know whether a state has been
//! seen, while cost-aware searches remember the cheapest cost found
//! so far so that a cheaper rediscovery can replace it.

use std::collections::HashMap;
use std::default::Default;
use std::hash::Hash;

use crate::traits::Cost;

/// Defines the behavior required of a reached map.
pub trait Reached<S>: Default {
    /// Whether the goal may be recognised as soon as it is generated.
    ///
    /// Searches which order by cost must wait until the goal is
    /// removed from the frontier to be sure no cheaper path remains.
    const GOAL_ON_GENERATE: bool;

    /// Record the start state before the search begins.
    fn seed(&mut self, state: &S, cost: Cost);

    /// Called when a node is taken off the frontier. Returning
    /// false discards the node without expanding it.
    fn should_expand(&mut self, state: &S, cost: Cost) -> bool;

    /// Called when a neighbour is generated. Returning true admits
    /// the neighbour to the frontier.
    fn admit(&mut self, state: &S, cost: Cost) -> bool;

    /// The cost recorded for a state, if any.
    fn get(&self, state: &S) -> Option<Cost>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand over every recorded state with its cost.
    fn into_map(self) -> HashMap<S, Cost>;
}

/// Records states once they have been expanded.
///
/// Duplicate frontier entries are tolerated and thrown away
/// when they are removed. Used by depth-first search.
#[derive(Debug)]
pub struct Expanded<S>
where
    S: Eq + Hash,
{
    expanded: HashMap<S, Cost>,
}

impl<S> Default for Expanded<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        Expanded {
            expanded: HashMap::default(),
        }
    }
}

impl<S> Reached<S> for Expanded<S>
where
    S: Clone + Eq + Hash,
{
    const GOAL_ON_GENERATE: bool = true;

    // Nothing is expanded before the loop starts.
    fn seed(&mut self, _state: &S, _cost: Cost) {}

    fn should_expand(&mut self, state: &S, cost: Cost) -> bool {
        if self.expanded.contains_key(state) {
            return false;
        }
        self.expanded.insert(state.clone(), cost);
        true
    }

    fn admit(&mut self, state: &S, _cost: Cost) -> bool {
        !self.expanded.contains_key(state)
    }

    fn get(&self, state: &S) -> Option<Cost> {
        self.expanded.get(state).copied()
    }

    fn len(&self) -> usize {
        self.expanded.len()
    }

    fn into_map(self) -> HashMap<S, Cost> {
        self.expanded
    }
}

/// Records states as soon as they are discovered, so that
/// no state is ever queued twice. Used by breadth-first search.
#[derive(Debug)]
pub struct Discovered<S>
where
    S: Eq + Hash,
{
    discovered: HashMap<S, Cost>,
}

impl<S> Default for Discovered<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        Discovered {
            discovered: HashMap::default(),
        }
    }
}

impl<S> Reached<S> for Discovered<S>
where
    S: Clone + Eq + Hash,
{
    const GOAL_ON_GENERATE: bool = true;

    fn seed(&mut self, state: &S, cost: Cost) {
        self.discovered.insert(state.clone(), cost);
    }

    fn should_expand(&mut self, _state: &S, _cost: Cost) -> bool {
        true
    }

    fn admit(&mut self, state: &S, cost: Cost) -> bool {
        if self.discovered.contains_key(state) {
            return false;
        }
        self.discovered.insert(state.clone(), cost);
        true
    }

    fn get(&self, state: &S) -> Option<Cost> {
        self.discovered.get(state).copied()
    }

    fn len(&self) -> usize {
        self.discovered.len()
    }

    fn into_map(self) -> HashMap<S, Cost> {
        self.discovered
    }
}

/// Records the cheapest known cost for every state discovered.
/// Used by uniform-cost and A* search.
#[derive(Debug)]
pub struct BestCost<S>
where
    S: Eq + Hash,
{
    best: HashMap<S, Cost>,
}

impl<S> Default for BestCost<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        BestCost {
            best: HashMap::default(),
        }
    }
}

impl<S> Reached<S> for BestCost<S>
where
    S: Clone + Eq + Hash,
{
    const GOAL_ON_GENERATE: bool = false;

    fn seed(&mut self, state: &S, cost: Cost) {
        self.best.insert(state.clone(), cost);
    }

    // A node whose cost was beaten after it was queued is stale.
    fn should_expand(&mut self, state: &S, cost: Cost) -> bool {
        self.best.get(state).map_or(true, |best| cost <= *best)
    }

    fn admit(&mut self, state: &S, cost: Cost) -> bool {
        // (a) Never seen this state: record it.
        // (b) Seen it, but this path is strictly cheaper: it wins.
        // (c) Seen it at the same or lower cost: ignore this path.
        match self.best.get_mut(state) {
            None => {
                self.best.insert(state.clone(), cost);
                true
            }
            Some(best) if cost < *best => {
                *best = cost;
                true
            }
            Some(_) => false,
        }
    }

    fn get(&self, state: &S) -> Option<Cost> {
        self.best.get(state).copied()
    }

    fn len(&self) -> usize {
        self.best.len()
    }

    fn into_map(self) -> HashMap<S, Cost> {
        self.best
    }
}
