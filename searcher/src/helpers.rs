//! A small state space for exercising the search algorithms.

use std::collections::HashMap;
use std::str::FromStr;

use crate::traits::{Cost, SearchHeuristic, StateSpace};

type Cell = (i32, i32);

const MOVES: [(char, Cell); 4] = [('U', (0, -1)), ('L', (-1, 0)), ('R', (1, 0)), ('D', (0, 1))];

/// Rows of cells, `#` blocked, `.` costing 1, a digit costing
/// that much, `S` and `E` marking the start and end.
#[derive(Debug, Clone, Default)]
pub(crate) struct Lattice {
    cells: HashMap<Cell, Cost>,
    start: Cell,
    end: Cell,
}

impl Lattice {
    pub(crate) fn with_end(mut self, end: Cell) -> Self {
        self.end = end;
        self
    }
}

impl FromStr for Lattice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lattice = Lattice::default();
        let rows = s.lines().map(str::trim).filter(|l| !l.is_empty());
        for (y, line) in rows.enumerate() {
            for (x, c) in line.chars().enumerate() {
                let cell = (x as i32, y as i32);
                let cost = match c {
                    '#' => continue,
                    '.' => 1,
                    'S' => {
                        lattice.start = cell;
                        1
                    }
                    'E' => {
                        lattice.end = cell;
                        1
                    }
                    c if c.is_ascii_digit() => c.to_digit(10).unwrap() as Cost,
                    _ => return Err(format!("Unexpected map character: {}", c)),
                };
                lattice.cells.insert(cell, cost);
            }
        }
        Ok(lattice)
    }
}

impl StateSpace for Lattice {
    type State = Cell;
    type Action = char;

    fn start(&self) -> Cell {
        self.start
    }

    fn end(&self) -> Cell {
        self.end
    }

    fn neighbours(&self, state: &Cell) -> Vec<(char, Cell)> {
        MOVES
            .iter()
            .map(|(action, (dx, dy))| (*action, (state.0 + dx, state.1 + dy)))
            .filter(|(_, cell)| self.cells.contains_key(cell))
            .collect()
    }

    fn cost(&self, state: &Cell) -> Cost {
        self.cells[state]
    }
}

impl SearchHeuristic for Lattice {
    fn heuristic(&self, state: &Cell) -> Cost {
        ((state.0 - self.end.0).abs() + (state.1 - self.end.1).abs()) as Cost
    }
}
