//! Provides the building blocks for search algorithms

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::frontier::Frontier;
use crate::node::Node;
use crate::reached::Reached;
use crate::solution::{NoSolution, Outcome, Solution};
use crate::traits::{Cost, SearchHeuristic, StateSpace};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod ucs;

/// Decides the priority a node is queued with.
///
/// Frontiers which are not ordered by priority ignore it.
pub trait Prioritize<G>
where
    G: StateSpace,
{
    fn priority(space: &G, node: &Node<G::State, G::Action>) -> Result<Cost>;
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F), a generic reached map (R) and a
/// priority rule (P) to provide a single foundation for depth-first,
/// breadth-first, uniform-cost and A* search.
#[derive(Debug)]
pub struct SearchAlgorithm<'s, G, F, R, P>
where
    G: StateSpace,
    F: Frontier<G::State, G::Action>,
    R: Reached<G::State>,
    P: Prioritize<G>,
{
    space: &'s G,
    frontier: F,
    reached: R,
    expansions: usize,
    priority: PhantomData<P>,
}

impl<'s, G, F, R, P> SearchAlgorithm<'s, G, F, R, P>
where
    G: StateSpace,
    F: Frontier<G::State, G::Action>,
    R: Reached<G::State>,
    P: Prioritize<G>,
{
    pub(crate) fn new(space: &'s G) -> Self {
        SearchAlgorithm {
            space,
            frontier: F::default(),
            reached: R::default(),
            expansions: 0,
            priority: PhantomData,
        }
    }

    fn step_cost(&self, state: &G::State) -> Result<Cost> {
        match self.space.cost(state) {
            0 => Err(SearchError::NonPositiveCost(format!("{:?}", state))),
            cost => Ok(cost),
        }
    }

    fn enqueue(&mut self, node: Node<G::State, G::Action>) -> Result<()> {
        let priority = P::priority(self.space, &node)?;
        self.frontier.add(node, priority);
        Ok(())
    }

    fn found(self, node: Node<G::State, G::Action>) -> Outcome<G::State, G::Action> {
        debug!(
            "Reached {:?} at cost {} after {} expansions",
            node.state(),
            node.cost(),
            self.expansions
        );
        Outcome::Solution(Solution::new(node, self.reached.into_map()))
    }

    /// Run the search until the end is found or the frontier is empty.
    pub fn run(mut self) -> Result<Outcome<G::State, G::Action>> {
        let start = Node::root(self.space.start());
        debug!("Searching from {:?} to {:?}", start.state(), self.space.end());

        self.reached.seed(start.state(), start.cost());
        if self.space.is_end(start.state()) {
            return Ok(self.found(start));
        }
        self.enqueue(start)?;

        while let Some(node) = self.frontier.remove() {
            if !self.reached.should_expand(node.state(), node.cost()) {
                trace!("Skipping {:?} at cost {}", node.state(), node.cost());
                continue;
            }

            if self.space.is_end(node.state()) {
                return Ok(self.found(node));
            }

            self.expansions += 1;
            if self.expansions % 10_000 == 0 {
                trace!(
                    "F{} R{} C{} {}",
                    self.frontier.len(),
                    self.reached.len(),
                    node.cost(),
                    self.expansions
                );
            }

            let parent = Rc::new(node);
            for (action, state) in self.space.neighbours(parent.state()) {
                let step = self.step_cost(&state)?;
                let cost = parent
                    .cost()
                    .checked_add(step)
                    .ok_or_else(|| SearchError::CostOverflow(format!("{:?}", state)))?;

                // The end is returned before it is recorded as reached.
                if R::GOAL_ON_GENERATE && self.space.is_end(&state) {
                    let child = Node::extend(parent.clone(), action, state, step);
                    return Ok(self.found(child));
                }
                if !self.reached.admit(&state, cost) {
                    continue;
                }

                let child = Node::extend(parent.clone(), action, state, step);
                self.enqueue(child)?;
            }
        }

        debug!(
            "Frontier exhausted after {} expansions, {} states reached",
            self.expansions,
            self.reached.len()
        );
        Ok(Outcome::NoSolution(NoSolution::new(self.reached.into_map())))
    }
}

/// The four search strategies, for callers which pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::AStar,
    ];

    /// Search `space` with this strategy.
    pub fn run<G>(self, space: &G) -> Result<Outcome<G::State, G::Action>>
    where
        G: SearchHeuristic,
    {
        match self {
            Algorithm::DepthFirst => basic::dfs(space),
            Algorithm::BreadthFirst => basic::bfs(space),
            Algorithm::UniformCost => ucs::ucs(space),
            Algorithm::AStar => astar::astar(space),
        }
    }

    /// Does this strategy always find the cheapest path?
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::UniformCost | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::AStar => "astar",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}
