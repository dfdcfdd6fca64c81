//! Engine error taxonomy.
//!
//! Only genuinely exceptional conditions are errors. Illegal moves and
//! exhausted undo are routine boolean-false outcomes on `GameEngine`, and
//! predictive-model failures are absorbed inside `MoveAdvisor` - none of
//! those appear here.

use thiserror::Error;

/// Errors surfaced by the puzzle engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Disk count is not a usable puzzle size. The engine rejects rather
    /// than silently clamping; range policy belongs to the caller.
    #[error("invalid configuration: disk count must be positive, got {disk_count}")]
    InvalidConfiguration { disk_count: u8 },

    /// An externally supplied snapshot does not hold exactly the disks
    /// `{1..N}` across its poles. Cannot occur for states mutated only
    /// through the engine.
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },
}

impl EngineError {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidConfiguration { disk_count: 0 };
        assert_eq!(
            err.to_string(),
            "invalid configuration: disk count must be positive, got 0"
        );

        let err = EngineError::invariant("disk 3 appears twice");
        assert_eq!(err.to_string(), "invariant violation: disk 3 appears twice");
    }
}
