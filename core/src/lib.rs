//! # MultiOTP Bridge Core
//!
//! Domain layer of the multiOTP bridge. It contains the validator requests,
//! the validation status taxonomy with its exit-code translation, the
//! validator capability traits and the adapter service that delegates every
//! decision to the external validator process.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
