//! Engine error model.

use thiserror::Error;

/// Result type used across the engine.
pub type ReportResult<T> = Result<T, ReportError>;

/// Engine-level error.
///
/// Keep this focused on the failure classes a report run can surface
/// (validation, computation, external assistant, submission conflicts).
/// No variant ever corrupts the snapshot; each run's failure is local.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A required filter is missing/invalid, or a snapshot invariant is
    /// broken. Rejected pre-dispatch; the caller re-prompts.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unexpected failure inside a deterministic computation. Should not
    /// occur for valid inputs.
    #[error("computation failed: {0}")]
    Computation(String),

    /// The generative assistant is unconfigured, unavailable, or failed.
    #[error("assistant error: {0}")]
    ExternalService(String),

    /// A duplicate submission for the report that is currently running.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ReportError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
