//! The rules engine.
//!
//! `RuneEngine` owns all game state and advances it one discrete action at
//! a time: place the pending rune, bank it in the forge, or spend a skull.
//! Collaborators (renderer, input mapper, UI shell) call the action methods
//! and read the accessors after each one; they carry no rules of their own.
//!
//! ## Sequencing
//!
//! A successful placement runs, atomically and in order: copy the rune into
//! the cell, award placement points, extend the streak, relieve one forge
//! slot, resolve line clears, draw the next rune, drop the selection. Line
//! resolution detects full rows and columns against the pre-clear occupancy
//! snapshot, so one cell can clear on both axes in the same pass.
//!
//! ## Termination
//!
//! Game over requires *both* a full forge and no legal move for the pending
//! rune. Level complete is every cell Gold, checked by the shell after each
//! action; it takes precedence over game over, and only the shell's
//! `start_new_round` call leaves it.

use std::time::Instant;

use crate::board::{CellState, Grid};
use crate::core::{EngineConfig, GameRng};
use crate::forge::Forge;
use crate::runes::{draw_rune, Rune};
use crate::scoring;

/// Result of a placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Was the rune placed?
    pub placed: bool,
    /// Did at least one row or column clear as a side effect?
    pub line_cleared: bool,
}

impl PlacementOutcome {
    const REJECTED: Self = Self {
        placed: false,
        line_cleared: false,
    };
}

/// Outcome of one line-clear resolution pass.
struct LineClearResolution {
    cleared: bool,
    wild_granted: bool,
}

/// The stateful rules engine for one game.
#[derive(Clone, Debug)]
pub struct RuneEngine {
    config: EngineConfig,
    rng: GameRng,
    grid: Grid,
    forge: Forge,
    board: u32,
    score: u64,
    placement_streak: u32,
    max_placement_streak: u32,
    boards_cleared: u32,
    started_at: Instant,
    current_rune: Option<Rune>,
    selected_cell: Option<(usize, usize)>,
}

impl RuneEngine {
    /// Create an engine with a seeded RNG.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine with an explicit RNG, for scripted draw sequences.
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: GameRng) -> Self {
        let board = config.start_board;
        let forge = Forge::new(config.forge_capacity);
        let mut engine = Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            forge,
            board,
            score: 0,
            placement_streak: 0,
            max_placement_streak: 0,
            boards_cleared: 0,
            started_at: Instant::now(),
            current_rune: None,
            selected_cell: None,
            config,
            rng,
        };
        engine.seed_round_grid();
        engine.current_rune = Some(draw_rune(engine.board, &mut engine.rng));
        engine
    }

    fn seed_round_grid(&mut self) {
        self.grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let (ox, oy) = self.config.origin();
        self.grid.put_rune(ox, oy, Rune::Wild);
    }

    // === Renderer surface ===

    /// The grid. Shared access only; all mutation goes through actions.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rune awaiting disposition, if any.
    #[must_use]
    pub fn current_rune(&self) -> Option<Rune> {
        self.current_rune
    }

    /// The forge.
    #[must_use]
    pub fn forge(&self) -> &Forge {
        &self.forge
    }

    /// Cumulative score. Monotone non-decreasing within a game.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current board tier (1-indexed; advances every round).
    #[must_use]
    pub fn board(&self) -> u32 {
        self.board
    }

    /// Transient UI selection hint. Not gameplay state.
    #[must_use]
    pub fn selected_cell(&self) -> Option<(usize, usize)> {
        self.selected_cell
    }

    /// Consecutive successful placements without a discard.
    #[must_use]
    pub fn placement_streak(&self) -> u32 {
        self.placement_streak
    }

    /// Longest placement streak this game.
    #[must_use]
    pub fn max_placement_streak(&self) -> u32 {
        self.max_placement_streak
    }

    /// Boards completed this game.
    #[must_use]
    pub fn boards_cleared(&self) -> u32 {
        self.boards_cleared
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Input surface ===

    /// Can the pending rune be placed at `(x, y)`?
    ///
    /// The cell must exist and be empty, the pending rune must exist and
    /// not be a skull, and the rune must match **every** occupied orthogonal
    /// neighbor. With no occupied neighbor, placement is legal only on a
    /// board holding zero runes anywhere (the true first move of a round).
    #[must_use]
    pub fn can_place_at(&self, x: usize, y: usize) -> bool {
        let Some(cell) = self.grid.get(x, y) else {
            return false;
        };
        if cell.is_occupied() {
            return false;
        }
        let Some(rune) = self.current_rune else {
            return false;
        };
        if rune.is_skull() {
            return false;
        }

        let occupied = self.grid.occupied_neighbors(x, y);
        if occupied.is_empty() {
            return self.grid.rune_count() == 0;
        }
        occupied
            .iter()
            .all(|neighbor| neighbor.rune.is_some_and(|r| rune.matches(&r)))
    }

    /// Place the pending rune at `(x, y)`.
    ///
    /// Invalid placements return `{placed: false, line_cleared: false}` with
    /// zero state change; retrying is always safe.
    pub fn place_rune(&mut self, x: usize, y: usize) -> PlacementOutcome {
        if !self.can_place_at(x, y) {
            return PlacementOutcome::REJECTED;
        }
        // can_place_at guarantees a pending non-skull rune.
        let Some(rune) = self.current_rune else {
            return PlacementOutcome::REJECTED;
        };

        self.grid.put_rune(x, y, rune);
        self.score += scoring::placement_points(self.board);
        self.placement_streak += 1;
        self.max_placement_streak = self.max_placement_streak.max(self.placement_streak);
        self.forge.pop();

        let resolution = self.resolve_line_clears();
        self.current_rune = if resolution.wild_granted {
            Some(Rune::Wild)
        } else {
            Some(draw_rune(self.board, &mut self.rng))
        };
        self.selected_cell = None;

        PlacementOutcome {
            placed: true,
            line_cleared: resolution.cleared,
        }
    }

    /// Detect and resolve full rows and columns.
    ///
    /// Fullness is judged against the occupancy snapshot before any
    /// clearing, independently per axis. Every full line scores, turns
    /// Gold, and empties; any clear at all empties the forge. If the board
    /// ends rune-free without being fully Gold, the player is compensated
    /// with a pending wild.
    fn resolve_line_clears(&mut self) -> LineClearResolution {
        let full_rows: Vec<usize> =
            (0..self.grid.height()).filter(|&y| self.grid.row_full(y)).collect();
        let full_cols: Vec<usize> =
            (0..self.grid.width()).filter(|&x| self.grid.col_full(x)).collect();

        for &y in &full_rows {
            self.score += scoring::line_clear_points(self.board);
            for x in 0..self.grid.width() {
                self.grid.set_state(x, y, CellState::Gold);
                self.grid.take_rune(x, y);
            }
        }
        for &x in &full_cols {
            self.score += scoring::line_clear_points(self.board);
            for y in 0..self.grid.height() {
                self.grid.set_state(x, y, CellState::Gold);
                self.grid.take_rune(x, y);
            }
        }

        let cleared = !full_rows.is_empty() || !full_cols.is_empty();
        if cleared {
            self.forge.clear();
        }

        let wild_granted =
            cleared && self.grid.rune_count() == 0 && !self.grid.is_all_gold();
        LineClearResolution {
            cleared,
            wild_granted,
        }
    }

    /// Bank the pending rune into the forge and draw a replacement.
    ///
    /// Fails (no mutation) with no pending rune or a full forge. A discard
    /// breaks the placement streak.
    pub fn discard_to_forge(&mut self) -> bool {
        let Some(rune) = self.current_rune else {
            return false;
        };
        if !self.forge.push(rune) {
            return false;
        }
        self.current_rune = Some(draw_rune(self.board, &mut self.rng));
        self.placement_streak = 0;
        self.selected_cell = None;
        true
    }

    /// Can the pending skull delete the rune at `(x, y)`?
    ///
    /// Requires a pending skull and a target holding a non-wild rune.
    #[must_use]
    pub fn can_skull_remove_at(&self, x: usize, y: usize) -> bool {
        if !self.current_rune.is_some_and(|r| r.is_skull()) {
            return false;
        }
        self.grid
            .get(x, y)
            .and_then(|cell| cell.rune)
            .is_some_and(|r| !r.is_wild())
    }

    /// Spend the pending skull to delete the rune at `(x, y)`.
    ///
    /// A board action like a placement: draws a fresh rune and relieves one
    /// forge slot. Fails (no mutation) when `can_skull_remove_at` is false.
    pub fn use_skull_to_remove(&mut self, x: usize, y: usize) -> bool {
        if !self.can_skull_remove_at(x, y) {
            return false;
        }
        self.grid.take_rune(x, y);
        self.current_rune = Some(draw_rune(self.board, &mut self.rng));
        self.forge.pop();
        self.selected_cell = None;
        true
    }

    /// Record a transient cell selection. Rejected out of bounds.
    pub fn select_cell(&mut self, x: usize, y: usize) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        self.selected_cell = Some((x, y));
        true
    }

    /// Drop the transient selection.
    pub fn clear_selection(&mut self) {
        self.selected_cell = None;
    }

    /// Map a continuous position to grid coordinates.
    ///
    /// Floor division by the configured cell size, relative to the board
    /// origin offset. Results can lie outside the grid; bounds-checking is
    /// the caller's job.
    #[must_use]
    pub fn point_to_cell(&self, px: f64, py: f64, origin_px: f64, origin_py: f64) -> (i64, i64) {
        let size = f64::from(self.config.cell_size);
        (
            ((px - origin_px) / size).floor() as i64,
            ((py - origin_py) / size).floor() as i64,
        )
    }

    // === Shell surface ===

    /// Does the pending rune have any legal disposition on the board?
    ///
    /// For a skull: any cell holding a non-wild rune. Otherwise: any cell
    /// where `can_place_at` holds. Discarding does not count.
    #[must_use]
    pub fn has_valid_move(&self) -> bool {
        match self.current_rune {
            None => false,
            Some(Rune::Skull) => self
                .grid
                .cells()
                .any(|cell| cell.rune.is_some_and(|r| !r.is_wild())),
            Some(_) => (0..self.grid.height())
                .any(|y| (0..self.grid.width()).any(|x| self.can_place_at(x, y))),
        }
    }

    /// Is the game lost?
    ///
    /// Only when the forge is at capacity *and* the pending rune has no
    /// legal move. Either condition alone is survivable.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.forge.is_full() && !self.has_valid_move()
    }

    /// Is the level complete? Every cell Gold; occupancy irrelevant.
    ///
    /// Checked by the shell after each action, independently of game over,
    /// and takes precedence when both hold.
    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.grid.is_all_gold()
    }

    /// Award the board-clear bonus.
    ///
    /// The shell calls this exactly once upon observing level complete,
    /// before `start_new_round`.
    pub fn complete_board(&mut self) {
        self.score += scoring::board_clear_points(self.board);
        self.boards_cleared += 1;
    }

    /// Begin the next round: fresh grid with the origin wild, advanced
    /// board tier, emptied forge shrunk by one slot, new pending rune.
    /// Score and stats persist. External trigger only; the engine never
    /// calls this itself.
    pub fn start_new_round(&mut self) {
        self.board += 1;
        self.forge.clear();
        self.forge.shrink();
        self.seed_round_grid();
        self.current_rune = Some(draw_rune(self.board, &mut self.rng));
        self.selected_cell = None;
    }

    /// Wall-clock seconds since the engine was constructed.
    #[must_use]
    pub fn game_time_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    // === Scripted-setup surface ===

    /// Force the pending rune. Scripted setups and tests; not part of
    /// normal play.
    pub fn set_current_rune(&mut self, rune: Option<Rune>) {
        self.current_rune = rune;
    }

    /// Force a cell's rune. Scripted setups and tests; keeps the occupancy
    /// counter consistent. No-op out of bounds.
    pub fn set_rune_at(&mut self, x: usize, y: usize, rune: Option<Rune>) {
        match rune {
            Some(r) => self.grid.put_rune(x, y, r),
            None => {
                self.grid.take_rune(x, y);
            }
        }
    }

    /// Force a cell's background state. Scripted setups and tests. No-op
    /// out of bounds.
    pub fn set_state_at(&mut self, x: usize, y: usize, state: CellState) {
        self.grid.set_state(x, y, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runes::{Color, Symbol};

    fn engine() -> RuneEngine {
        RuneEngine::new(EngineConfig::default(), 42)
    }

    fn crimson_aries() -> Rune {
        Rune::normal(Color::Crimson, Symbol::Aries)
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.board(), 1);
        assert!(engine.forge().is_empty());
        assert!(engine.current_rune().is_some());
        assert_eq!(engine.grid().rune_count(), 1);
        assert_eq!(engine.grid().get(4, 3).unwrap().rune, Some(Rune::Wild));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = RuneEngine::new(EngineConfig::default(), 7);
        let mut b = RuneEngine::new(EngineConfig::default(), 7);

        assert_eq!(a.current_rune(), b.current_rune());
        a.discard_to_forge();
        b.discard_to_forge();
        assert_eq!(a.current_rune(), b.current_rune());
    }

    #[test]
    fn test_cannot_place_on_occupied_cell() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        assert!(!engine.can_place_at(4, 3));
    }

    #[test]
    fn test_cannot_place_out_of_bounds() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        assert!(!engine.can_place_at(9, 0));
        assert!(!engine.can_place_at(0, 8));
    }

    #[test]
    fn test_skull_is_never_placeable() {
        let mut engine = engine();
        engine.set_current_rune(Some(Rune::Skull));
        assert!(!engine.can_place_at(3, 3));
        let outcome = engine.place_rune(3, 3);
        assert!(!outcome.placed);
    }

    #[test]
    fn test_no_pending_rune_means_no_placement() {
        let mut engine = engine();
        engine.set_current_rune(None);
        assert!(!engine.can_place_at(3, 3));
        assert!(!engine.discard_to_forge());
        assert!(!engine.has_valid_move());
    }

    #[test]
    fn test_isolated_placement_illegal_when_board_occupied() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        // (0, 0) has no occupied neighbor but the origin wild is on the
        // board, so the placement is illegal even as the "first" move.
        assert!(!engine.can_place_at(0, 0));
        assert!(engine.can_place_at(3, 3));
    }

    #[test]
    fn test_empty_board_allows_any_cell() {
        let mut engine = engine();
        engine.set_rune_at(4, 3, None);
        engine.set_current_rune(Some(crimson_aries()));
        assert_eq!(engine.grid().rune_count(), 0);
        assert!(engine.can_place_at(0, 0));
        assert!(engine.can_place_at(8, 7));
    }

    #[test]
    fn test_unanimous_adjacency() {
        let mut engine = engine();
        // Two neighbors of (3, 3): the origin wild at (4, 3) and a teal/leo
        // at (3, 2). A crimson/aries matches the wild but not teal/leo, so
        // unanimity fails.
        engine.set_rune_at(3, 2, Some(Rune::normal(Color::Teal, Symbol::Leo)));
        engine.set_current_rune(Some(crimson_aries()));
        assert!(!engine.can_place_at(3, 3));

        // Sharing a symbol with the non-wild neighbor restores unanimity.
        engine.set_current_rune(Some(Rune::normal(Color::Crimson, Symbol::Leo)));
        assert!(engine.can_place_at(3, 3));
    }

    #[test]
    fn test_placement_awards_points_and_streak() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        let outcome = engine.place_rune(3, 3);

        assert!(outcome.placed);
        assert!(!outcome.line_cleared);
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.placement_streak(), 1);
        assert_eq!(engine.grid().get(3, 3).unwrap().rune, Some(crimson_aries()));
        assert!(engine.current_rune().is_some());
    }

    #[test]
    fn test_invalid_placement_mutates_nothing() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        let score = engine.score();

        let outcome = engine.place_rune(0, 0);
        assert_eq!(outcome, PlacementOutcome::REJECTED);
        assert_eq!(engine.score(), score);
        assert_eq!(engine.current_rune(), Some(crimson_aries()));
        assert_eq!(engine.grid().rune_count(), 1);
    }

    #[test]
    fn test_placement_drains_one_forge_slot() {
        let mut engine = engine();
        engine.discard_to_forge();
        engine.discard_to_forge();
        assert_eq!(engine.forge().len(), 2);

        engine.set_current_rune(Some(crimson_aries()));
        assert!(engine.place_rune(3, 3).placed);
        assert_eq!(engine.forge().len(), 1);
    }

    #[test]
    fn test_discard_breaks_streak_and_fails_at_capacity() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        engine.place_rune(3, 3);
        assert_eq!(engine.placement_streak(), 1);

        assert!(engine.discard_to_forge());
        assert_eq!(engine.placement_streak(), 0);
        assert_eq!(engine.max_placement_streak(), 1);

        assert!(engine.discard_to_forge());
        assert!(engine.discard_to_forge());
        assert!(engine.forge().is_full());
        assert!(!engine.discard_to_forge());
        assert_eq!(engine.forge().len(), 3);
    }

    #[test]
    fn test_skull_removal_rules() {
        let mut engine = engine();
        engine.set_rune_at(3, 3, Some(crimson_aries()));
        engine.set_current_rune(Some(Rune::Skull));

        // Wilds are never removable; empty cells have nothing to remove.
        assert!(!engine.can_skull_remove_at(4, 3));
        assert!(!engine.can_skull_remove_at(0, 0));
        assert!(engine.can_skull_remove_at(3, 3));

        assert!(!engine.use_skull_to_remove(4, 3));
        assert_eq!(engine.grid().get(4, 3).unwrap().rune, Some(Rune::Wild));

        assert!(engine.use_skull_to_remove(3, 3));
        assert!(engine.grid().get(3, 3).unwrap().rune.is_none());
        assert_ne!(engine.current_rune(), Some(Rune::Skull));
    }

    #[test]
    fn test_skull_use_drains_forge() {
        let mut engine = engine();
        engine.discard_to_forge();
        engine.set_rune_at(3, 3, Some(crimson_aries()));
        engine.set_current_rune(Some(Rune::Skull));

        assert!(engine.use_skull_to_remove(3, 3));
        assert!(engine.forge().is_empty());
    }

    #[test]
    fn test_skull_requires_pending_skull() {
        let mut engine = engine();
        engine.set_rune_at(3, 3, Some(crimson_aries()));
        engine.set_current_rune(Some(crimson_aries()));
        assert!(!engine.can_skull_remove_at(3, 3));
        assert!(!engine.use_skull_to_remove(3, 3));
    }

    #[test]
    fn test_selection_is_transient() {
        let mut engine = engine();
        assert!(engine.select_cell(2, 2));
        assert_eq!(engine.selected_cell(), Some((2, 2)));
        assert!(!engine.select_cell(20, 2));

        engine.set_current_rune(Some(crimson_aries()));
        engine.place_rune(3, 3);
        assert_eq!(engine.selected_cell(), None);
    }

    #[test]
    fn test_point_to_cell_floor_division() {
        let engine = engine();
        // 48px cells, board origin at (10, 20).
        assert_eq!(engine.point_to_cell(10.0, 20.0, 10.0, 20.0), (0, 0));
        assert_eq!(engine.point_to_cell(57.9, 20.0, 10.0, 20.0), (0, 0));
        assert_eq!(engine.point_to_cell(58.0, 68.0, 10.0, 20.0), (1, 1));
        // Left/above the origin maps negative; the caller rejects it.
        assert_eq!(engine.point_to_cell(0.0, 0.0, 10.0, 20.0), (-1, -1));
    }

    #[test]
    fn test_complete_board_awards_bonus() {
        let mut engine = engine();
        engine.complete_board();
        assert_eq!(engine.score(), 50);
        assert_eq!(engine.boards_cleared(), 1);
    }

    #[test]
    fn test_start_new_round() {
        let mut engine = engine();
        engine.set_current_rune(Some(crimson_aries()));
        engine.place_rune(3, 3);
        engine.discard_to_forge();
        let score = engine.score();

        engine.start_new_round();

        assert_eq!(engine.board(), 2);
        assert_eq!(engine.score(), score);
        assert!(engine.forge().is_empty());
        assert_eq!(engine.forge().capacity(), 2);
        assert_eq!(engine.grid().rune_count(), 1);
        assert_eq!(engine.grid().get(4, 3).unwrap().rune, Some(Rune::Wild));
        assert!(engine.grid().cells().all(|c| !c.is_gold()));
    }

    #[test]
    fn test_forge_capacity_never_shrinks_below_one() {
        let mut engine = engine();
        for _ in 0..10 {
            engine.start_new_round();
        }
        assert_eq!(engine.forge().capacity(), 1);
        assert_eq!(engine.board(), 11);
    }
}
