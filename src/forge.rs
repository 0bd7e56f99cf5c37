//! The forge: a bounded discard buffer.
//!
//! Stack discipline, and the LIFO order is load-bearing: the last rune
//! discarded is the first one relieved by a successful placement, which is
//! what the player "sees coming back" in the forge display.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::runes::Rune;

/// Bounded LIFO buffer of discarded runes.
///
/// Invariant: `0 <= len <= capacity` at all times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forge {
    slots: SmallVec<[Rune; 4]>,
    capacity: usize,
}

impl Forge {
    /// Create an empty forge with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "Forge capacity must be at least 1");
        Self {
            slots: SmallVec::new(),
            capacity,
        }
    }

    /// Maximum number of runes this forge holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of runes currently banked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Is the forge empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Is the forge at capacity?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Bank a rune. Fails (no mutation) at capacity.
    pub fn push(&mut self, rune: Rune) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(rune);
        true
    }

    /// Relieve one slot, most recent first. `None` when empty; never an
    /// error.
    pub fn pop(&mut self) -> Option<Rune> {
        self.slots.pop()
    }

    /// Empty the forge entirely.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Shrink capacity by one slot, clamped to 1. Applied on round
    /// transitions; any overflow is dropped oldest-first.
    pub fn shrink(&mut self) {
        self.capacity = (self.capacity - 1).max(1);
        while self.slots.len() > self.capacity {
            self.slots.remove(0);
        }
    }

    /// Banked runes, oldest first (top of the stack last).
    #[must_use]
    pub fn slots(&self) -> &[Rune] {
        &self.slots
    }
}
