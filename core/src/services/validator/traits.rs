//! Traits for the validator capability and the process seam behind it

use async_trait::async_trait;

use crate::domain::value_objects::ValidationResult;
use crate::errors::InvocationResult;

/// One-time password validator capability
///
/// Implementations never fail across this boundary: every failure is
/// reported through [`ValidationResult::status`].
#[async_trait]
pub trait OneTimePasswordValidator: Send + Sync {
    /// Check a one-time code for a user
    async fn check_password(&self, username: &str, otp: &str) -> ValidationResult;

    /// Realign a user's token with two consecutive codes
    async fn resync(&self, username: &str, otp1: &str, otp2: &str) -> ValidationResult;
}

/// Runs the external validator once and reports its exit code
#[async_trait]
pub trait ValidatorInvoker: Send + Sync {
    /// Run the validator with `args` and wait for its exit code
    async fn invoke(&self, args: &[String]) -> InvocationResult<i32>;

    /// Program name used in diagnostics
    fn program(&self) -> &str;
}
