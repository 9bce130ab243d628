//! Structured result returned to callers of the validator capability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status_code::StatusCode;
use super::validation_status::ValidationStatus;

/// Result of one check or resync operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Translated outcome
    pub status: ValidationStatus,
    /// Raw exit code, absent when the validator never produced one
    pub exit_code: Option<i32>,
    /// Correlation id of the invocation
    pub invocation_id: Uuid,
    /// When the invocation finished
    pub checked_at: DateTime<Utc>,
}

impl ValidationResult {
    /// Result for a validator that exited with `code`
    pub fn from_exit_code(invocation_id: Uuid, code: i32) -> Self {
        Self {
            status: ValidationStatus::from_exit_code(code),
            exit_code: Some(code),
            invocation_id,
            checked_at: Utc::now(),
        }
    }

    /// Result for an invocation that produced no exit code
    pub fn without_exit_code(invocation_id: Uuid, status: ValidationStatus) -> Self {
        Self {
            status,
            exit_code: None,
            invocation_id,
            checked_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exit_code_keeps_raw_code() {
        let id = Uuid::new_v4();
        let result = ValidationResult::from_exit_code(id, 21);
        assert_eq!(result.status, ValidationStatus::UnknownUser);
        assert_eq!(result.exit_code, Some(21));
        assert_eq!(result.invocation_id, id);
        assert!(!result.is_success());
        assert_eq!(result.status_code(), StatusCode::NotFound);
    }

    #[test]
    fn test_without_exit_code() {
        let result =
            ValidationResult::without_exit_code(Uuid::new_v4(), ValidationStatus::ValidatorTimedOut);
        assert_eq!(result.exit_code, None);
        assert_eq!(result.status_code(), StatusCode::Unknown);
    }
}
