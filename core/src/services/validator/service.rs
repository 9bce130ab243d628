//! Adapter delegating validation to an external validator process

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::entities::{CheckRequest, ResyncRequest, ValidatorCommand};
use crate::domain::value_objects::ValidationResult;

use super::config::AdapterConfig;
use super::traits::{OneTimePasswordValidator, ValidatorInvoker};

/// Validator that runs one external invocation per operation
///
/// The adapter holds no mutable state; concurrent calls each get their own
/// invocation and their own result.
pub struct ExternalValidatorAdapter<I: ValidatorInvoker> {
    /// Process seam
    invoker: Arc<I>,
    /// Argument rendering
    config: AdapterConfig,
}

impl<I: ValidatorInvoker> Clone for ExternalValidatorAdapter<I> {
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
            config: self.config.clone(),
        }
    }
}

impl<I: ValidatorInvoker> ExternalValidatorAdapter<I> {
    /// Create a new adapter
    ///
    /// # Arguments
    ///
    /// * `invoker` - Process seam used to reach the validator
    /// * `config` - Argument rendering configuration
    pub fn new(invoker: Arc<I>, config: AdapterConfig) -> Self {
        Self { invoker, config }
    }

    /// Run a command and translate its outcome
    ///
    /// Exactly one invocation is issued. Invocation failures are folded into
    /// the result status.
    pub async fn execute(&self, command: ValidatorCommand) -> ValidationResult {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "validator_invocation",
            invocation_id = %invocation_id,
            mode = command.mode(),
            program = self.invoker.program(),
        );

        async move {
            let args = command.to_args(&self.config.check_flags, &self.config.resync_flag);

            tracing::debug!(
                username = command.username(),
                arg_count = args.len(),
                event = "validator_invoked",
                "Invoking external validator"
            );

            match self.invoker.invoke(&args).await {
                Ok(code) => {
                    let result = ValidationResult::from_exit_code(invocation_id, code);
                    if result.is_success() {
                        tracing::info!(
                            username = command.username(),
                            exit_code = code,
                            event = "validator_accepted",
                            "Validator accepted the request"
                        );
                    } else {
                        tracing::warn!(
                            username = command.username(),
                            exit_code = code,
                            status = %result.status,
                            event = "validator_rejected",
                            "Validator rejected the request"
                        );
                    }
                    result
                }
                Err(e) => {
                    tracing::error!(
                        username = command.username(),
                        error = %e,
                        event = "validator_invocation_failed",
                        "Failed to obtain a validator verdict"
                    );
                    ValidationResult::without_exit_code(invocation_id, e.status())
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<I: ValidatorInvoker> OneTimePasswordValidator for ExternalValidatorAdapter<I> {
    async fn check_password(&self, username: &str, otp: &str) -> ValidationResult {
        self.execute(CheckRequest::new(username, otp).into()).await
    }

    async fn resync(&self, username: &str, otp1: &str, otp2: &str) -> ValidationResult {
        self.execute(ResyncRequest::new(username, otp1, otp2).into())
            .await
    }
}
