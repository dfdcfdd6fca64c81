//! Move representation.
//!
//! A move is an ordered `(from, to)` pole pair. Like `PoleId`, the type does
//! not enforce legality (or even `from != to`) - predictive models produce
//! arbitrary candidates and `MoveValidator` is the single place that judges
//! them.
//!
//! Moves also have a dense index encoding `from * 3 + to` in `0..9`, shared
//! with the predictive-model output head and the training datasets.

use serde::{Deserialize, Serialize};

use super::disk::{PoleId, POLE_COUNT};

/// Number of dense move encodings (including the three no-op diagonals).
pub const MOVE_ENCODINGS: usize = POLE_COUNT * POLE_COUNT;

/// An ordered pole pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Pole the disk is lifted from.
    pub from: PoleId,
    /// Pole the disk is placed on.
    pub to: PoleId,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: PoleId, to: PoleId) -> Self {
        Self { from, to }
    }

    /// The reverse move, as replayed by undo.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Dense index encoding: `from * 3 + to`.
    #[must_use]
    pub fn to_index(self) -> usize {
        self.from.index() * POLE_COUNT + self.to.index()
    }

    /// Decode a dense move index.
    ///
    /// Returns `None` for indices outside `0..9`. Diagonal indices decode to
    /// `from == to` moves, which the validator will reject.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= MOVE_ENCODINGS {
            return None;
        }
        Some(Self {
            from: PoleId::new((index / POLE_COUNT) as u8),
            to: PoleId::new((index % POLE_COUNT) as u8),
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from.raw(), self.to.raw())
    }
}
