//! The grid.
//!
//! A contiguous row-major `Vec<Cell>` indexed `y * width + x`, created once
//! per round and mutated in place. The grid is exclusively owned by the
//! engine; readers get shared references only.
//!
//! Occupancy questions ("is the board empty?") are answered by an
//! incremental rune counter maintained by the mutators, never by a full
//! scan. All rune mutation must go through `put_rune`/`take_rune` or the
//! counter drifts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::cell::{Cell, CellState};
use crate::runes::Rune;

/// A `width × height` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    rune_count: usize,
}

impl Grid {
    /// Create an all-Lead, all-empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "Grid dimensions must be at least 1");

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }

        Self {
            width,
            height,
            cells,
            rune_count: 0,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells currently holding a rune.
    #[must_use]
    pub fn rune_count(&self) -> usize {
        self.rune_count
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Does `(x, y)` lie on the grid?
    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell, if in bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Put a rune into a cell, replacing any occupant.
    ///
    /// No-op out of bounds.
    pub fn put_rune(&mut self, x: usize, y: usize, rune: Rune) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.idx(x, y);
        if self.cells[idx].rune.is_none() {
            self.rune_count += 1;
        }
        self.cells[idx].rune = Some(rune);
    }

    /// Remove and return the rune at a cell, if any.
    pub fn take_rune(&mut self, x: usize, y: usize) -> Option<Rune> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.idx(x, y);
        let taken = self.cells[idx].rune.take();
        if taken.is_some() {
            self.rune_count -= 1;
        }
        taken
    }

    /// Set a cell's background state.
    pub fn set_state(&mut self, x: usize, y: usize, state: CellState) {
        if self.in_bounds(x, y) {
            let idx = self.idx(x, y);
            self.cells[idx].state = state;
        }
    }

    /// Up-to-4 orthogonal neighbor coordinates. No diagonals, no wraparound.
    #[must_use]
    pub fn neighbors(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 4]> {
        let mut out = SmallVec::new();
        if x > 0 {
            out.push((x - 1, y));
        }
        if x + 1 < self.width {
            out.push((x + 1, y));
        }
        if y > 0 {
            out.push((x, y - 1));
        }
        if y + 1 < self.height {
            out.push((x, y + 1));
        }
        out
    }

    /// Neighbor cells that currently hold a rune.
    #[must_use]
    pub fn occupied_neighbors(&self, x: usize, y: usize) -> SmallVec<[&Cell; 4]> {
        self.neighbors(x, y)
            .into_iter()
            .filter_map(|(nx, ny)| self.get(nx, ny))
            .filter(|c| c.is_occupied())
            .collect()
    }

    /// Does every cell of row `y` hold a rune?
    #[must_use]
    pub fn row_full(&self, y: usize) -> bool {
        (0..self.width).all(|x| self.cells[self.idx(x, y)].is_occupied())
    }

    /// Does every cell of column `x` hold a rune?
    #[must_use]
    pub fn col_full(&self, x: usize) -> bool {
        (0..self.height).all(|y| self.cells[self.idx(x, y)].is_occupied())
    }

    /// Is every cell permanently Gold?
    #[must_use]
    pub fn is_all_gold(&self) -> bool {
        self.cells.iter().all(Cell::is_gold)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
