//! Validator process module
//!
//! Provides the [`ValidatorInvoker`](motp_core::services::ValidatorInvoker)
//! implementation that runs the external multiOTP executable.

pub mod invoker;

pub use invoker::ProcessInvoker;
