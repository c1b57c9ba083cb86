//! Pathfinding across a [Grid] with the algorithms from `searcher`.
use searcher::{Algorithm, Cost, Outcome, SearchHeuristic, SearchResult, StateSpace};

use super::grid::Grid;
use super::{Direction, Point};

impl StateSpace for Grid {
    type State = Point;
    type Action = Direction;

    fn start(&self) -> Point {
        Grid::start(self)
    }

    fn end(&self) -> Point {
        Grid::end(self)
    }

    fn neighbours(&self, state: &Point) -> Vec<(Direction, Point)> {
        state
            .adjacent()
            .filter(|(_, point)| self.is_passable(*point))
            .collect()
    }

    // Blocked cells cost nothing, which the search reports as an error.
    fn cost(&self, state: &Point) -> Cost {
        self.cost_of(*state).unwrap_or(0)
    }
}

/// Manhattan distance to the end. Every step costs at least 1
/// and moves one cell along one axis, so this never overestimates.
impl SearchHeuristic for Grid {
    fn heuristic(&self, state: &Point) -> Cost {
        state.manhattan_distance(Grid::end(self)) as Cost
    }
}

/// The outcome of searching a grid.
pub type GridOutcome = Outcome<Point, Direction>;

impl Grid {
    /// Find a path from the start to the end of this grid.
    pub fn search(&self, algorithm: Algorithm) -> SearchResult<GridOutcome> {
        algorithm.run(self)
    }
}
