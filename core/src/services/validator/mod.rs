//! Validator service module
//!
//! This module provides the one-time password validator capability backed by
//! an external validator executable:
//! - Rendering check and resync requests into validator arguments
//! - A single invocation per operation through the [`ValidatorInvoker`] seam
//! - Translation of exit codes and invocation failures into a structured result

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::AdapterConfig;
pub use service::ExternalValidatorAdapter;
pub use traits::{OneTimePasswordValidator, ValidatorInvoker};
