//! Rune drawing.
//!
//! `draw_rune` is a pure function of the board tier and the injected RNG
//! stream: first a wild roll, then a skull roll, then a uniform color and
//! symbol from the tier's palette prefixes. Palettes only ever grow with
//! the tier (the lookup is monotone), so a rune drawn on board 1 is still
//! drawable on board 20.

use crate::core::GameRng;
use crate::runes::rune::{Color, Rune, Symbol};

/// Probability that a draw yields a wild rune.
pub const WILD_CHANCE: f64 = 0.03;

/// Probability that a non-wild draw yields a skull rune.
pub const SKULL_CHANCE: f64 = 0.02;

/// Number of symbols in play at the given board tier.
#[must_use]
pub const fn symbol_count(board: u32) -> usize {
    match board {
        0..=3 => 5,
        4..=6 => 8,
        _ => 12,
    }
}

/// Number of colors in play at the given board tier.
#[must_use]
pub const fn color_count(board: u32) -> usize {
    match board {
        0..=3 => 4,
        4..=6 => 5,
        _ => 8,
    }
}

/// Draw a rune for the given board tier.
pub fn draw_rune(board: u32, rng: &mut GameRng) -> Rune {
    if rng.gen_bool(WILD_CHANCE) {
        return Rune::Wild;
    }
    if rng.gen_bool(SKULL_CHANCE) {
        return Rune::Skull;
    }

    let color = Color::PALETTE[rng.gen_range_usize(0..color_count(board))];
    let symbol = Symbol::PALETTE[rng.gen_range_usize(0..symbol_count(board))];
    Rune::normal(color, symbol)
}
