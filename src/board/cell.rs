//! Cell state.
//!
//! State and occupancy are independent axes: Gold is "permanently won"
//! background, rune presence is "currently filled". A Gold cell holds a
//! rune only in the window between a line being re-filled and the next
//! clear check; a Lead cell may or may not hold one.

use serde::{Deserialize, Serialize};

use crate::runes::Rune;

/// Background state of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Not yet won.
    #[default]
    Lead,
    /// Permanently won by a line clear.
    Gold,
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column, 0-indexed from the left.
    pub x: usize,
    /// Row, 0-indexed from the top.
    pub y: usize,
    /// Background state.
    pub state: CellState,
    /// Rune currently occupying this cell, if any. Owned; copied in on
    /// placement, never aliased.
    pub rune: Option<Rune>,
}

impl Cell {
    /// Create an empty Lead cell.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            state: CellState::Lead,
            rune: None,
        }
    }

    /// Does this cell hold a rune?
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.rune.is_some()
    }

    /// Is this cell permanently won?
    #[must_use]
    pub fn is_gold(&self) -> bool {
        self.state == CellState::Gold
    }
}
