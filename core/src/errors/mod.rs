//! Error types raised at the validator process boundary.

use std::time::Duration;

use thiserror::Error;

use crate::domain::value_objects::ValidationStatus;

/// Failures of the invocation itself, as opposed to a validator verdict
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Validator executable not found: {program}")]
    NotFound { program: String },

    #[error("Validator executable is not executable: {program}")]
    PermissionDenied { program: String },

    #[error("Failed to run validator {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Validator {program} timed out after {after:?}")]
    TimedOut { program: String, after: Duration },

    #[error("Validator {program} terminated without an exit code")]
    Terminated { program: String },
}

impl InvocationError {
    /// Classify a spawn or wait failure
    pub fn from_io(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => InvocationError::NotFound { program },
            std::io::ErrorKind::PermissionDenied => InvocationError::PermissionDenied { program },
            _ => InvocationError::Spawn { program, source },
        }
    }

    /// Status reported to callers for this failure
    pub fn status(&self) -> ValidationStatus {
        match self {
            InvocationError::NotFound { .. }
            | InvocationError::PermissionDenied { .. }
            | InvocationError::Spawn { .. } => ValidationStatus::ValidatorUnavailable,
            InvocationError::TimedOut { .. } => ValidationStatus::ValidatorTimedOut,
            InvocationError::Terminated { .. } => ValidationStatus::AbnormalTermination,
        }
    }
}

pub type InvocationResult<T> = Result<T, InvocationError>;
