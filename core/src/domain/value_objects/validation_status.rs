//! Validation outcome taxonomy and the exit-code translation policy.

use serde::{Deserialize, Serialize};

use super::status_code::StatusCode;

/// Exit codes documented by the multiOTP command-line validator
pub mod exit_codes {
    /// Token accepted
    pub const OK: i32 = 0;
    /// Token resynchronized successfully
    pub const RESYNC_OK: i32 = 14;
    /// User is blacklisted
    pub const USER_BLACKLISTED: i32 = 20;
    /// User does not exist
    pub const UNKNOWN_USER: i32 = 21;
    /// Token locked after too many tries
    pub const TOKEN_LOCKED: i32 = 24;
    /// Token temporarily delayed after too many tries
    pub const TOKEN_DELAYED: i32 = 25;
    /// Token has already been used
    pub const TOKEN_ALREADY_USED: i32 = 26;
    /// Resynchronization failed
    pub const RESYNC_FAILED: i32 = 27;
    /// Token does not exist
    pub const UNKNOWN_TOKEN: i32 = 29;
    /// At least one parameter is missing
    pub const MISSING_PARAMETER: i32 = 30;
    /// User is deactivated
    pub const USER_DISABLED: i32 = 38;
    /// Authentication failed (wrong code)
    pub const AUTHENTICATION_FAILED: i32 = 99;
}

/// Outcome of one validator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// The presented code was accepted
    Accepted,
    /// The token was realigned with the client generator
    Resynchronized,
    /// The presented code is wrong
    WrongCode,
    /// The validator does not know the user
    UnknownUser,
    /// The user has no token attached
    UnknownToken,
    /// The user is blacklisted
    UserBlacklisted,
    /// The user is deactivated
    UserDisabled,
    /// Too many failures, the token is locked
    TokenLocked,
    /// Too many failures, retry later
    TokenDelayed,
    /// The code was already consumed
    TokenAlreadyUsed,
    /// The two codes could not realign the token
    ResyncFailed,
    /// The validator rejected the argument list
    MissingParameter,
    /// The validator could not be started
    ValidatorUnavailable,
    /// The validator did not finish within the deadline
    ValidatorTimedOut,
    /// The validator ended without an exit code
    AbnormalTermination,
    /// The validator returned a code outside the documented set
    UnexpectedExitCode(i32),
}

impl ValidationStatus {
    /// Translate a validator exit code. Total over `i32`.
    pub const fn from_exit_code(code: i32) -> Self {
        match code {
            exit_codes::OK => ValidationStatus::Accepted,
            exit_codes::RESYNC_OK => ValidationStatus::Resynchronized,
            exit_codes::USER_BLACKLISTED => ValidationStatus::UserBlacklisted,
            exit_codes::UNKNOWN_USER => ValidationStatus::UnknownUser,
            exit_codes::TOKEN_LOCKED => ValidationStatus::TokenLocked,
            exit_codes::TOKEN_DELAYED => ValidationStatus::TokenDelayed,
            exit_codes::TOKEN_ALREADY_USED => ValidationStatus::TokenAlreadyUsed,
            exit_codes::RESYNC_FAILED => ValidationStatus::ResyncFailed,
            exit_codes::UNKNOWN_TOKEN => ValidationStatus::UnknownToken,
            exit_codes::MISSING_PARAMETER => ValidationStatus::MissingParameter,
            exit_codes::USER_DISABLED => ValidationStatus::UserDisabled,
            exit_codes::AUTHENTICATION_FAILED => ValidationStatus::WrongCode,
            other => ValidationStatus::UnexpectedExitCode(other),
        }
    }

    /// Accepted or resynchronized; every other outcome is a failure
    pub const fn is_success(&self) -> bool {
        self.status_code().is_success()
    }

    /// Coarse classification of this outcome
    pub const fn status_code(&self) -> StatusCode {
        match self {
            ValidationStatus::Accepted => StatusCode::Ok,
            ValidationStatus::Resynchronized => StatusCode::ResyncOk,
            ValidationStatus::WrongCode
            | ValidationStatus::TokenAlreadyUsed
            | ValidationStatus::ResyncFailed => StatusCode::NotVerified,
            ValidationStatus::UnknownUser | ValidationStatus::UnknownToken => StatusCode::NotFound,
            ValidationStatus::MissingParameter => StatusCode::Incomplete,
            ValidationStatus::UserBlacklisted
            | ValidationStatus::UserDisabled
            | ValidationStatus::TokenLocked
            | ValidationStatus::TokenDelayed => StatusCode::GeneralError,
            ValidationStatus::ValidatorUnavailable
            | ValidationStatus::ValidatorTimedOut
            | ValidationStatus::AbnormalTermination
            | ValidationStatus::UnexpectedExitCode(_) => StatusCode::Unknown,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> String {
        match self {
            ValidationStatus::Accepted => "Token accepted".to_string(),
            ValidationStatus::Resynchronized => "Token resynchronized".to_string(),
            ValidationStatus::WrongCode => "Authentication failed".to_string(),
            ValidationStatus::UnknownUser => "User does not exist".to_string(),
            ValidationStatus::UnknownToken => "Token does not exist".to_string(),
            ValidationStatus::UserBlacklisted => "User is blacklisted".to_string(),
            ValidationStatus::UserDisabled => "User is deactivated".to_string(),
            ValidationStatus::TokenLocked => "Token locked after too many tries".to_string(),
            ValidationStatus::TokenDelayed => "Token delayed after too many tries".to_string(),
            ValidationStatus::TokenAlreadyUsed => "Token has already been used".to_string(),
            ValidationStatus::ResyncFailed => "Token resynchronization failed".to_string(),
            ValidationStatus::MissingParameter => "At least one parameter is missing".to_string(),
            ValidationStatus::ValidatorUnavailable => "Validator could not be started".to_string(),
            ValidationStatus::ValidatorTimedOut => "Validator timed out".to_string(),
            ValidationStatus::AbnormalTermination => {
                "Validator terminated without an exit code".to_string()
            }
            ValidationStatus::UnexpectedExitCode(code) => {
                format!("Unexpected validator exit code: {}", code)
            }
        }
    }
}

impl From<i32> for ValidationStatus {
    fn from(code: i32) -> Self {
        ValidationStatus::from_exit_code(code)
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_accepted() {
        let status = ValidationStatus::from_exit_code(0);
        assert_eq!(status, ValidationStatus::Accepted);
        assert!(status.is_success());
        assert_eq!(status.status_code(), StatusCode::Ok);
    }

    #[test]
    fn test_documented_codes() {
        let cases = [
            (14, ValidationStatus::Resynchronized),
            (20, ValidationStatus::UserBlacklisted),
            (21, ValidationStatus::UnknownUser),
            (24, ValidationStatus::TokenLocked),
            (25, ValidationStatus::TokenDelayed),
            (26, ValidationStatus::TokenAlreadyUsed),
            (27, ValidationStatus::ResyncFailed),
            (29, ValidationStatus::UnknownToken),
            (30, ValidationStatus::MissingParameter),
            (38, ValidationStatus::UserDisabled),
            (99, ValidationStatus::WrongCode),
        ];

        for (code, expected) in cases {
            assert_eq!(ValidationStatus::from_exit_code(code), expected, "exit code {}", code);
        }
    }

    #[test]
    fn test_translation_is_total() {
        let mut samples = vec![i32::MIN, i32::MIN + 1, -1, 1, 255, 256, i32::MAX - 1, i32::MAX];
        samples.extend(-512..=512);
        samples.extend((0..64).map(|shift| 1i32.wrapping_shl(shift) ^ 0x5a5a));

        for code in samples {
            let status = ValidationStatus::from_exit_code(code);
            if code == 0 || code == 14 {
                assert!(status.is_success());
            } else {
                assert!(!status.is_success(), "exit code {} must not succeed", code);
            }
            // Every status classifies and describes itself
            let _ = status.status_code();
            assert!(!status.description().is_empty());
        }
    }

    #[test]
    fn test_unknown_codes_keep_their_value() {
        assert_eq!(
            ValidationStatus::from_exit_code(42),
            ValidationStatus::UnexpectedExitCode(42)
        );
        assert_eq!(
            ValidationStatus::from_exit_code(-1073741515),
            ValidationStatus::UnexpectedExitCode(-1073741515)
        );
        assert_eq!(ValidationStatus::from(7).status_code(), StatusCode::Unknown);
    }

    #[test]
    fn test_status_code_classification() {
        assert_eq!(ValidationStatus::WrongCode.status_code(), StatusCode::NotVerified);
        assert_eq!(ValidationStatus::UnknownUser.status_code(), StatusCode::NotFound);
        assert_eq!(ValidationStatus::MissingParameter.status_code(), StatusCode::Incomplete);
        assert_eq!(ValidationStatus::TokenLocked.status_code(), StatusCode::GeneralError);
        assert_eq!(ValidationStatus::ValidatorUnavailable.status_code(), StatusCode::Unknown);
        assert_eq!(ValidationStatus::Resynchronized.status_code(), StatusCode::ResyncOk);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&ValidationStatus::WrongCode).unwrap(),
            "\"wrong_code\""
        );
        assert_eq!(
            serde_json::to_string(&ValidationStatus::UnexpectedExitCode(3)).unwrap(),
            "{\"unexpected_exit_code\":3}"
        );
    }
}
