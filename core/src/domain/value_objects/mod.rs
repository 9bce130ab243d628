//! Value objects describing the outcome of a validator invocation.

pub mod status_code;
pub mod validation_result;
pub mod validation_status;

// Re-export commonly used types
pub use status_code::StatusCode;
pub use validation_result::ValidationResult;
pub use validation_status::{exit_codes, ValidationStatus};
