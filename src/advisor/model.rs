//! Predictive-model capability.
//!
//! The advisor programs against `PredictiveModel`, never a concrete type.
//! Real implementations live outside this crate (a serving boundary wrapping
//! a trained network); in-crate there is only the null implementation and
//! helpers for the shared move-index output head.
//!
//! Implementations absorb their own failures: a load or inference error is
//! expressed as `None`, never an error the advisor would have to handle.

use tracing::debug;

use crate::core::{Move, MOVE_ENCODINGS};

use super::encoding::EncodedState;

/// An optional, pluggable predictor over encoded puzzle states.
///
/// Candidates are best-effort guesses. The advisor validates them against
/// the live state and falls back on rejection, so implementations are free
/// to be wrong - absence or inaccuracy degrades hinting quality, never
/// correctness.
pub trait PredictiveModel: Send + Sync {
    /// Candidate next move for the encoded state, or `None`.
    fn predict_move(&self, encoded: &EncodedState) -> Option<Move>;

    /// Confidence in `[0, 1]` that the encoded state is solved.
    ///
    /// Optional second head; the default is "not offered". Advisory only -
    /// the engine's structural check stays authoritative.
    fn classify_solved(&self, _encoded: &EncodedState) -> Option<f32> {
        None
    }
}

/// The absent capability. Always defers to the advisor's fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullModel;

impl PredictiveModel for NullModel {
    fn predict_move(&self, _encoded: &EncodedState) -> Option<Move> {
        None
    }
}

/// Decode a 9-way move distribution into its argmax move.
///
/// The output head uses the dense `from * 3 + to` encoding; diagonal argmax
/// picks decode to `from == to` moves the validator then rejects. Returns
/// `None` for a malformed distribution (wrong arity or non-finite values).
#[must_use]
pub fn move_from_distribution(probs: &[f32]) -> Option<Move> {
    if probs.len() != MOVE_ENCODINGS || probs.iter().any(|p| !p.is_finite()) {
        debug!(arity = probs.len(), "malformed move distribution");
        return None;
    }
    let (index, _) = probs
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))?;
    Move::from_index(index)
}
