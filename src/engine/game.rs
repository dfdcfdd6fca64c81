//! Mutable game session.
//!
//! `GameEngine` wraps one `PuzzleState` with a move counter and a bounded
//! undo history. It is the only path through which state mutates, and every
//! mutation is validator-gated and atomic: a failed apply leaves nothing
//! changed.
//!
//! The engine assumes single-writer access. Callers sharing a session across
//! threads serialize mutations externally; the engine performs no locking.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::{EngineError, Move, PoleId, PuzzleConfig, PuzzleState, StateSnapshot};

use super::validator;
use super::validator::MoveList;

/// One puzzle session: state, move count, bounded undo history.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: PuzzleState,
    config: PuzzleConfig,
    move_count: u64,
    history: VecDeque<Move>,
}

impl GameEngine {
    /// Start a session at the canonical state for the given configuration.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        let state = PuzzleState::canonical(config.disk_count);
        Self {
            state,
            config,
            move_count: 0,
            history: VecDeque::new(),
        }
    }

    /// Convenience constructor from a bare disk count.
    pub fn with_disks(disk_count: u8) -> Result<Self, EngineError> {
        Ok(Self::new(PuzzleConfig::new(disk_count)?))
    }

    /// Resume a session from an externally supplied snapshot.
    ///
    /// The snapshot is validated (`InvariantViolation` on corruption).
    /// History starts empty: moves made before the snapshot was taken are
    /// not undoable.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, EngineError> {
        let state = PuzzleState::from_snapshot(snapshot)?;
        let config = PuzzleConfig::new(state.disk_count())?;
        Ok(Self {
            state,
            config,
            move_count: 0,
            history: VecDeque::new(),
        })
    }

    /// The current puzzle state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Snapshot the current state. O(1).
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Number of disks in this session.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.config.disk_count
    }

    /// Moves applied minus moves undone.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Currently retained undo depth.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply a move if legal.
    ///
    /// On success the top disk of `from` lands on `to`, the move count
    /// increments, and the move is recorded for undo (evicting the oldest
    /// record at capacity). On an illegal move nothing mutates and `false`
    /// is returned - callers branch on this routinely.
    pub fn apply_move(&mut self, from: PoleId, to: PoleId) -> bool {
        if !validator::is_legal(&self.state, from, to) {
            return false;
        }
        let mv = Move::new(from, to);
        // Legality guarantees the source pole is non-empty.
        if let Some(disk) = self.state.lift(from) {
            self.state.place(to, disk);
        }
        self.move_count += 1;
        // Capacity 0 retains nothing; otherwise evict down to make room so
        // the bound holds even if the capacity was lowered mid-session.
        if self.config.history_capacity > 0 {
            while self.history.len() >= self.config.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(mv);
        }
        debug!(%mv, move_count = self.move_count, "move applied");
        true
    }

    /// Undo the most recent retained move.
    ///
    /// Returns `false` when history is empty - including when earlier moves
    /// exist but were evicted past the history capacity. Eviction is
    /// permanent by design.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.pop_back() else {
            return false;
        };
        let reversed = mv.reversed();
        // The top of the original destination is exactly the disk that
        // moved there, so the reverse replay cannot be blocked.
        if let Some(disk) = self.state.lift(reversed.from) {
            self.state.place(reversed.to, disk);
        }
        self.move_count -= 1;
        debug!(%mv, move_count = self.move_count, "move undone");
        true
    }

    /// Exact structural solved check: pole 2 holds all disks.
    ///
    /// This is the authoritative check; the advisor's probabilistic
    /// classifier is advisory only.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_complete()
    }

    /// Completion percentage in `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        100.0 * self.state.pole_height(PoleId::new(2)) as f64 / f64::from(self.config.disk_count)
    }

    /// All legal moves, in ascending `(from, to)` order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        validator::legal_moves(&self.state)
    }

    /// Restore the canonical start, clearing history and move count.
    pub fn reset(&mut self) {
        self.state = PuzzleState::canonical(self.config.disk_count);
        self.move_count = 0;
        self.history.clear();
        debug!(disk_count = self.config.disk_count, "session reset");
    }
}
