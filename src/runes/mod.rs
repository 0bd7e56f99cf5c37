//! Rune value types and the draw function.

pub mod factory;
pub mod rune;

pub use factory::{color_count, draw_rune, symbol_count, SKULL_CHANCE, WILD_CHANCE};
pub use rune::{Color, Rune, Symbol};
