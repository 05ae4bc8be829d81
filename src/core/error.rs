//! Error types for the engine, the external stores and the session glue.

use thiserror::Error;

use crate::round::Phase;
use crate::store::UserId;

/// Result alias for engine and session operations.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Contract violations raised by `RoundEngine`.
///
/// These always indicate a caller bug and are never recovered locally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Operation invoked outside the phase it requires.
    #[error("cannot {operation} while round is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },

    /// Supplied digits break the sequence invariants.
    #[error("invalid sequence: {reason}")]
    InvalidSequence { reason: String },
}

impl EngineError {
    pub(crate) fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        Self::InvalidState { operation, phase }
    }
}

/// Failures reported by the score and profile collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
