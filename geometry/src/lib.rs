#![deny(clippy::all)]

//! Two dimensional grids which can be searched for paths.

pub mod coord2d;

pub use coord2d::grid::{Grid, GridBuilder, GridError};
pub use coord2d::pathfinder::GridOutcome;
pub use coord2d::{BoundingBox, Direction, ParsePointError, Point};

/// Data type used for coordinates
pub type Position = i32;
