//! A rectangular grid of cells, some blocked, each open cell
//! carrying the cost of stepping onto it.
//!
//! Grids are checked when they are built, so a [Grid] always has
//! its start and end on open cells inside its bounds, and every
//! open cell costs at least one.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use searcher::Cost;
use thiserror::Error;

use super::{BoundingBox, Point};
use crate::Position;

/// Error returned when a grid would break its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("A grid needs at least one row and one column")]
    Empty,

    #[error("{0} is outside of the grid")]
    OutOfBounds(Point),

    #[error("{0} is blocked")]
    Blocked(Point),

    #[error("Entering {0} must cost at least 1")]
    ZeroCost(Point),

    #[error("No start was given")]
    MissingStart,

    #[error("No end was given")]
    MissingEnd,

    #[error("Marker {0} appears twice, again at {1}")]
    DuplicateMarker(char, Point),

    #[error("Unexpected map character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

type GridResult<T> = Result<T, GridError>;

/// The search space: which cells can be entered, and at what cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundingBox,
    costs: BTreeMap<Point, Cost>,
    start: Point,
    end: Point,
}

impl Grid {
    /// Start describing a grid where every cell is open and costs 1.
    pub fn builder(width: Position, height: Position) -> GridBuilder {
        GridBuilder::new(width, height)
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn width(&self) -> Position {
        self.bounds.width()
    }

    pub fn height(&self) -> Position {
        self.bounds.height()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Can this cell be entered?
    pub fn is_passable(&self, point: Point) -> bool {
        self.costs.contains_key(&point)
    }

    /// Cost of entering a cell, or `None` when it is blocked
    /// or outside of the grid.
    pub fn cost_of(&self, point: Point) -> Option<Cost> {
        self.costs.get(&point).copied()
    }

    /// Iterate over the open cells in reading order.
    pub fn open_cells(&self) -> impl Iterator<Item = (&Point, &Cost)> {
        self.costs.iter()
    }

    /// The same grid, searching between a different pair of cells.
    pub fn with_endpoints(&self, start: Point, end: Point) -> GridResult<Self> {
        let grid = Grid {
            bounds: self.bounds,
            costs: self.costs.clone(),
            start,
            end,
        };
        grid.check_endpoint(start)?;
        grid.check_endpoint(end)?;
        Ok(grid)
    }

    fn check_endpoint(&self, point: Point) -> GridResult<()> {
        if !self.bounds.contains(point) {
            return Err(GridError::OutOfBounds(point));
        }
        if !self.is_passable(point) {
            return Err(GridError::Blocked(point));
        }
        Ok(())
    }

    fn symbol(&self, point: &Point) -> char {
        match self.cost_of(*point) {
            _ if *point == self.start => 'S',
            _ if *point == self.end => 'E',
            None => '#',
            Some(1) => '.',
            Some(c) if c < 10 => std::char::from_digit(c as u32, 10).unwrap_or('+'),
            Some(_) => '+',
        }
    }
}

/// Writes the grid back out in the map format. Costs above 9
/// are shown as `+` and cannot be parsed again.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.bounds
            .printer(f, |f, point| write!(f, "{}", self.symbol(point)))
    }
}

/// Collects the cells of a grid, then checks them all at once.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    bounds: BoundingBox,
    costs: BTreeMap<Point, Cost>,
    walls: BTreeSet<Point>,
    start: Option<Point>,
    end: Option<Point>,
    empty: bool,
}

impl GridBuilder {
    pub fn new(width: Position, height: Position) -> Self {
        let empty = width <= 0 || height <= 0;
        let bounds = BoundingBox::from_size(width.max(1), height.max(1));
        GridBuilder {
            costs: bounds.points().map(|p| (p, 1)).collect(),
            bounds,
            walls: BTreeSet::new(),
            start: None,
            end: None,
            empty,
        }
    }

    /// Block a cell.
    pub fn wall(mut self, point: Point) -> Self {
        self.costs.remove(&point);
        self.walls.insert(point);
        self
    }

    /// Open a cell, with the cost of stepping onto it.
    pub fn cost(mut self, point: Point, cost: Cost) -> Self {
        self.walls.remove(&point);
        self.costs.insert(point, cost);
        self
    }

    pub fn start(mut self, point: Point) -> Self {
        self.start = Some(point);
        self
    }

    pub fn end(mut self, point: Point) -> Self {
        self.end = Some(point);
        self
    }

    pub fn build(self) -> GridResult<Grid> {
        if self.empty {
            return Err(GridError::Empty);
        }

        let bounds = self.bounds;
        if let Some(point) = self
            .costs
            .keys()
            .chain(self.walls.iter())
            .find(|p| !bounds.contains(**p))
        {
            return Err(GridError::OutOfBounds(*point));
        }

        if let Some((point, _)) = self.costs.iter().find(|(_, cost)| **cost == 0) {
            return Err(GridError::ZeroCost(*point));
        }

        let grid = Grid {
            bounds,
            costs: self.costs,
            start: self.start.ok_or(GridError::MissingStart)?,
            end: self.end.ok_or(GridError::MissingEnd)?,
        };
        grid.check_endpoint(grid.start)?;
        grid.check_endpoint(grid.end)?;
        Ok(grid)
    }
}

/// Parses maps made of rows of cells:
///
/// * `#` blocked
/// * `.` open, costing 1
/// * `1`-`9` open, costing that digit
/// * `S` / `E` the start and end, costing 1
///
/// Surrounding whitespace and blank lines are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut builder = GridBuilder::new(width as Position, rows.len() as Position);
        let mut start = None;
        let mut end = None;

        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, c) in line.chars().enumerate() {
                let point: Point = (x, y).into();
                builder = match c {
                    '#' => builder.wall(point),
                    '.' => builder,
                    'S' | 'E' => {
                        let marker = if c == 'S' { &mut start } else { &mut end };
                        if marker.replace(point).is_some() {
                            return Err(GridError::DuplicateMarker(c, point));
                        }
                        builder
                    }
                    c if c.is_ascii_digit() => {
                        let cost = c.to_digit(10).map(|d| d as Cost).unwrap_or_default();
                        builder.cost(point, cost)
                    }
                    c => return Err(GridError::UnexpectedCharacter(c, point)),
                };
            }
        }

        if let Some(point) = start {
            builder = builder.start(point);
        }
        if let Some(point) = end {
            builder = builder.end(point);
        }
        builder.build()
    }
}
