//! Error types for the transfer pipeline.

use crate::action::ApplyError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::InvariantViolation;

/// Identifies which stage of the transfer pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    Resolve,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Resolve => "resolve",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Internal faults surfaced while executing a command.
///
/// Player-facing rejections are never errors; they are reported through
/// [`crate::TransferOutcome`]. Every variant here leaves the player unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("catalog lookup failed: {0}")]
    Oracle(TransitionPhaseError<OracleError>),

    #[error("mutation failed: {0}")]
    Apply(TransitionPhaseError<ApplyError>),

    #[error("invariant check failed: {0}")]
    InvariantViolation(TransitionPhaseError<InvariantViolation>),
}

impl ExecuteError {
    pub fn oracle(phase: TransitionPhase, error: OracleError) -> Self {
        Self::Oracle(TransitionPhaseError::new(phase, error))
    }

    pub fn apply(error: ApplyError) -> Self {
        Self::Apply(TransitionPhaseError::new(TransitionPhase::Apply, error))
    }

    pub fn invariant(error: InvariantViolation) -> Self {
        Self::InvariantViolation(TransitionPhaseError::new(TransitionPhase::PostValidate, error))
    }

    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Oracle(err) => err.phase,
            ExecuteError::Apply(err) => err.phase,
            ExecuteError::InvariantViolation(err) => err.phase,
        }
    }

    pub fn as_invariant_violation(&self) -> Option<&InvariantViolation> {
        match self {
            ExecuteError::InvariantViolation(err) => Some(&err.error),
            _ => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Oracle(err) => err.error.severity(),
            ExecuteError::Apply(err) => err.error.severity(),
            ExecuteError::InvariantViolation(err) => err.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Oracle(err) => err.error.error_code(),
            ExecuteError::Apply(err) => err.error.error_code(),
            ExecuteError::InvariantViolation(err) => err.error.error_code(),
        }
    }
}
