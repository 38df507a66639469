//! # Core Models Module
//!
//! Data structures describing a hospital placement problem.
//!
//! ## Key Components
//!
//! - [`cell`] - A 0-indexed `(row, col)` coordinate and the Manhattan metric
//! - [`grid`] - Grid dimensions, hospital count, the house set, and neighbour queries
//! - [`placement`] - An immutable set of hospital cells, replaced wholesale on every move
//!
//! ## Usage
//!
//! ```ignore
//! use hospitals::core::models::{cell::Cell, grid::Grid, placement::Placement};
//!
//! let mut grid = Grid::new(1, 5, 1)?;
//! grid.add_house(Cell::new(0, 0))?;
//! grid.add_house(Cell::new(0, 4))?;
//!
//! let placement = Placement::from_iter([Cell::new(0, 2)]);
//! ```

pub mod cell;
pub mod grid;
pub mod placement;
