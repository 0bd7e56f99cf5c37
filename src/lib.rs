//! # runeforge
//!
//! Rules engine for a single-player rune placement puzzle.
//!
//! The player repeatedly receives a randomly drawn rune (a color+symbol
//! token, or a special wild/skull variant), places it next to compatible
//! tiles on a grid, or banks it into a bounded "forge" buffer. Completing a
//! full row or column converts it to permanent gold and empties the forge;
//! turning the whole board gold completes the level. The game ends when the
//! forge is full and the pending rune has no legal placement or skull use.
//!
//! ## Design Principles
//!
//! 1. **One stateful object**: `RuneEngine` owns all game state. Renderers,
//!    input mappers, and UI shells call its action methods and read its
//!    accessors after each action; none of them carry rules logic.
//!
//! 2. **Deterministic randomness**: every rune draw flows through an
//!    injected seedable `GameRng`, so tests reproduce exact draw sequences.
//!
//! 3. **No panics in the action path**: invalid actions report a
//!    boolean/structured "not performed" result with zero state mutation.
//!    Validation lives in `EngineConfig` at construction time.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `runes`: rune value types, palettes, and the draw function
//! - `board`: cells and the grid
//! - `forge`: the bounded discard buffer
//! - `scoring`: board-tier-indexed point formulas
//! - `engine`: the rules engine itself

pub mod core;
pub mod runes;
pub mod board;
pub mod forge;
pub mod scoring;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameRngState};

pub use crate::runes::{draw_rune, Color, Rune, Symbol, SKULL_CHANCE, WILD_CHANCE};

pub use crate::board::{Cell, CellState, Grid};

pub use crate::forge::Forge;

pub use crate::engine::{PlacementOutcome, RuneEngine};
