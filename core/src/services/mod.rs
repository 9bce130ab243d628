//! Services containing the validator use cases.

pub mod validator;

// Re-export commonly used types
pub use validator::{
    AdapterConfig, ExternalValidatorAdapter, OneTimePasswordValidator, ValidatorInvoker,
};
