//! Engine configuration.
//!
//! The UI shell configures the engine at construction time: grid
//! dimensions, forge capacity, the starting board tier, and a cell-size
//! pixel hint used only by the coordinate-mapping helper. The rules
//! themselves never read pixels.
//!
//! Validation happens here, not in the action API: dimensions and
//! capacities must be at least 1, asserted when set. Invalid *actions* at
//! runtime are reported as boolean results instead.

use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// Defaults match the standard game: 9×8 grid, forge capacity 3, board
/// tier 1, 48px cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub grid_width: usize,

    /// Grid height in cells.
    pub grid_height: usize,

    /// Maximum number of runes the forge holds at board tier 1.
    pub forge_capacity: usize,

    /// Cell size in pixels. A hint for the coordinate-mapping helper;
    /// irrelevant to the rules.
    pub cell_size: u32,

    /// Starting board tier (1-indexed).
    pub start_board: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_width: 9,
            grid_height: 8,
            forge_capacity: 3,
            cell_size: 48,
            start_board: 1,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid_size(mut self, width: usize, height: usize) -> Self {
        assert!(width >= 1, "Grid width must be at least 1");
        assert!(height >= 1, "Grid height must be at least 1");
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Set the forge capacity.
    #[must_use]
    pub fn with_forge_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity >= 1, "Forge capacity must be at least 1");
        self.forge_capacity = capacity;
        self
    }

    /// Set the cell-size pixel hint.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        assert!(cell_size >= 1, "Cell size must be at least 1");
        self.cell_size = cell_size;
        self
    }

    /// Set the starting board tier.
    #[must_use]
    pub fn with_start_board(mut self, board: u32) -> Self {
        assert!(board >= 1, "Board tier is 1-indexed");
        self.start_board = board;
        self
    }

    /// The origin cell seeded with a wild rune at every round start.
    ///
    /// Center of the grid, rounded toward the top-left: `(4, 3)` on the
    /// default 9×8.
    #[must_use]
    pub fn origin(&self) -> (usize, usize) {
        ((self.grid_width - 1) / 2, (self.grid_height - 1) / 2)
    }
}
