//! Error Types
//!
//! Only two failure modes ever cross the public boundary of the engine:
//! rejected arguments and a computation that fails on its very first run.
//! Everything else (steady-state failures, panicking hooks, failed reruns
//! during change propagation) is isolated and reported through `tracing`.

use thiserror::Error;

use crate::reactive::ComputationId;

/// Errors returned by the reactive engine.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An argument was rejected before any computation was created.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// The computation's function failed on its first run.
    ///
    /// There is no earlier good state to fall back to, so the failure is
    /// handed back to whoever started the computation.
    #[error("computation {id} failed on its first run: {error:#}")]
    FirstRun {
        /// The computation that failed.
        id: ComputationId,
        /// The error returned by the user function.
        error: anyhow::Error,
    },
}

impl TrackerError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns the user error if this is a first-run failure.
    pub fn user_error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::FirstRun { error, .. } => Some(error),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = TrackerError> = std::result::Result<T, E>;
