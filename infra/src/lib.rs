//! # Infrastructure Layer
//!
//! Concrete implementations behind the multiOTP bridge domain:
//! - **Process**: the multiOTP executable invoked as a child process
//! - **Config**: layered configuration loading (defaults, file, environment)
//! - **Telemetry**: tracing subscriber setup

use std::sync::Arc;

use motp_core::services::{AdapterConfig, ExternalValidatorAdapter};
use motp_shared::config::ValidatorConfig;

// Re-export core types for convenience
pub use motp_core::errors::*;

/// Configuration loading
pub mod config;

/// Validator process invocation
pub mod process;

/// Tracing subscriber setup
pub mod telemetry;

pub use process::ProcessInvoker;

/// Adapter backed by the external validator process
pub type ProcessValidator = ExternalValidatorAdapter<ProcessInvoker>;

/// Create a validator adapter from configuration
///
/// # Example
///
/// ```ignore
/// let config = motp_infra::config::load_config()?;
/// let validator = motp_infra::create_validator(&config.validator);
/// let result = validator.check_password("alice", "123456").await;
/// ```
pub fn create_validator(config: &ValidatorConfig) -> ProcessValidator {
    tracing::info!(
        executable = %config.executable.display(),
        timeout_secs = config.timeout_secs,
        "Creating external validator adapter"
    );

    ExternalValidatorAdapter::new(
        Arc::new(ProcessInvoker::from_config(config)),
        AdapterConfig::from(config),
    )
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Tracing subscriber error
    #[error("Logging setup error: {0}")]
    Logging(String),
}
