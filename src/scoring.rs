//! Board-tier-indexed scoring formulas.
//!
//! Placement and line-clear points step up every 3 board tiers; a full
//! board clear scales linearly with the tier.

/// Points for a successful placement.
#[must_use]
pub const fn placement_points(board: u32) -> u64 {
    10 + 2 * ((board as u64 - 1) / 3)
}

/// Points for clearing one full row or column.
#[must_use]
pub const fn line_clear_points(board: u32) -> u64 {
    25 + 5 * ((board as u64 - 1) / 3)
}

/// Points for turning the whole board gold.
#[must_use]
pub const fn board_clear_points(board: u32) -> u64 {
    50 + 10 * (board as u64 - 1)
}
