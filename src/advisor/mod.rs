//! Move advisory: single-step suggestions for arbitrary mid-game states.
//!
//! Two capability tiers, tried in strict order:
//!
//! 1. An optional predictive model. Its candidate is returned as-is when it
//!    passes the validator; the advisor never corrects a prediction.
//! 2. A deterministic fallback heuristic that always yields a legal move
//!    when one exists: move the smallest disk, preferring destinations
//!    1, 2, 0.
//!
//! Model absence, errors, and illegal candidates all degrade silently to
//! the fallback. The advisor never returns an illegal move.

pub mod encoding;
pub mod model;

use tracing::{debug, warn};

use crate::core::{Disk, Move, PoleId, PuzzleState};
use crate::engine::validator;

pub use encoding::{encode_snapshot, EncodedState};
pub use model::{move_from_distribution, NullModel, PredictiveModel};

/// Classifier threshold above which a state reads as solved.
pub const SOLVED_THRESHOLD: f32 = 0.5;

/// Destination preference for the fallback heuristic.
const FALLBACK_DESTINATIONS: [PoleId; 3] = [PoleId::new(1), PoleId::new(2), PoleId::new(0)];

/// Joint solved report: the exact structural check next to the classifier's
/// advisory estimate.
///
/// The two can disagree near the classifier's decision boundary. That
/// disagreement is surfaced here (and logged) rather than reconciled -
/// `exact` is always the answer to act on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvedReport {
    /// Authoritative structural check.
    pub exact: bool,

    /// Classifier confidence, if the model offers that head.
    pub confidence: Option<f32>,
}

impl SolvedReport {
    /// The classifier's thresholded verdict, if available.
    #[must_use]
    pub fn estimate(&self) -> Option<bool> {
        self.confidence.map(|c| c > SOLVED_THRESHOLD)
    }

    /// True when the classifier is present and contradicts the exact check.
    #[must_use]
    pub fn disagrees(&self) -> bool {
        self.estimate().is_some_and(|e| e != self.exact)
    }
}

/// Single-move advisor over an optional predictive model.
pub struct MoveAdvisor {
    model: Option<Box<dyn PredictiveModel>>,
}

impl MoveAdvisor {
    /// Advisor with no predictive capability: pure fallback heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self { model: None }
    }

    /// Advisor backed by a predictive model.
    #[must_use]
    pub fn with_model(model: Box<dyn PredictiveModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Whether a predictive model is loaded.
    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Suggest a single next move.
    ///
    /// Returns `None` only when no legal move exists (a zero-disk puzzle)
    /// or the union-valid state has the smallest disk buried - neither is
    /// reachable through normal play. Deterministic whenever the model tier
    /// does not fire.
    #[must_use]
    pub fn suggest(&self, state: &PuzzleState) -> Option<Move> {
        if let Some(model) = &self.model {
            let encoded = encoding::encode_snapshot(&state.snapshot());
            if let Some(candidate) = model.predict_move(&encoded) {
                if validator::is_legal(state, candidate.from, candidate.to) {
                    debug!(%candidate, "model candidate accepted");
                    return Some(candidate);
                }
                debug!(%candidate, "model candidate illegal, falling back");
            } else {
                debug!("model returned no candidate, falling back");
            }
        }
        Self::fallback(state)
    }

    /// Fallback heuristic: source is the first pole (in index order) whose
    /// top is the smallest disk; destination is the first of poles 1, 2, 0
    /// that differs from the source and is empty or topped by a larger disk.
    ///
    /// The smallest disk can land anywhere, and some other pole is always
    /// empty-or-larger, so this terminates with a legal move.
    fn fallback(state: &PuzzleState) -> Option<Move> {
        let from = PoleId::all().find(|&p| state.top_of(p) == Some(Disk::SMALLEST))?;
        for to in FALLBACK_DESTINATIONS {
            if to != from && state.top_of(to).map_or(true, |d| d > Disk::SMALLEST) {
                return Some(Move::new(from, to));
            }
        }
        None
    }

    /// Joint solved check: exact structural answer plus the classifier's
    /// advisory confidence. Logs a warning when the two disagree.
    #[must_use]
    pub fn check_solved(&self, state: &PuzzleState) -> SolvedReport {
        let exact = state.is_complete();
        let confidence = self.model.as_ref().and_then(|model| {
            model.classify_solved(&encoding::encode_snapshot(&state.snapshot()))
        });

        let report = SolvedReport { exact, confidence };
        if report.disagrees() {
            warn!(
                exact,
                confidence = confidence.unwrap_or(f32::NAN),
                "solved classifier disagrees with structural check"
            );
        }
        report
    }

    /// Apply suggestions to an engine until it is solved or the move budget
    /// runs out, returning the applied moves.
    ///
    /// A suggestion the engine rejects stops the drive early; with the
    /// fallback tier in place that only happens on unreachable states.
    pub fn drive(&self, engine: &mut crate::engine::GameEngine, max_moves: usize) -> Vec<Move> {
        let mut applied = Vec::new();
        for _ in 0..max_moves {
            if engine.is_solved() {
                break;
            }
            let Some(mv) = self.suggest(engine.state()) else {
                break;
            };
            if !engine.apply_move(mv.from, mv.to) {
                debug!(%mv, "drive stopped on rejected suggestion");
                break;
            }
            applied.push(mv);
        }
        applied
    }
}

impl Default for MoveAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
