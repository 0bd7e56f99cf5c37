//! Cells and the grid.

pub mod cell;
pub mod grid;

pub use cell::{Cell, CellState};
pub use grid::Grid;
