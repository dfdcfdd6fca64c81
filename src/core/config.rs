//! Puzzle configuration.
//!
//! Construction-time configuration replaces the ambient globals a UI layer
//! would otherwise carry. The engine itself only requires a positive disk
//! count; the conventional 3..=8 bounds are published as constants for
//! boundary collaborators that want to clamp user input, but the engine
//! never clamps on its own.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Conventional lower bound on disk count for interactive play.
pub const MIN_DISKS: u8 = 3;

/// Conventional upper bound on disk count for interactive play.
pub const MAX_DISKS: u8 = 8;

/// Default disk count for a fresh game.
pub const DEFAULT_DISKS: u8 = 3;

/// Undo history depth. Older moves are evicted and become permanently
/// non-undoable once a session exceeds this many moves.
pub const HISTORY_CAPACITY: usize = 100;

/// Configuration for one puzzle session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of disks, fixed for the session's lifetime.
    pub disk_count: u8,

    /// Maximum retained undo history.
    pub history_capacity: usize,
}

impl PuzzleConfig {
    /// Create a validated configuration.
    ///
    /// Fails with `InvalidConfiguration` for a zero disk count. Larger
    /// counts are accepted as-is; range policy is the caller's.
    pub fn new(disk_count: u8) -> Result<Self, EngineError> {
        if disk_count == 0 {
            return Err(EngineError::InvalidConfiguration { disk_count });
        }
        Ok(Self {
            disk_count,
            history_capacity: HISTORY_CAPACITY,
        })
    }

    /// Override the undo history depth.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check a disk count against the conventional interactive range.
    ///
    /// Advisory; `new` accepts any positive count.
    #[must_use]
    pub fn in_conventional_range(disk_count: u8) -> bool {
        (MIN_DISKS..=MAX_DISKS).contains(&disk_count)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISKS,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}
