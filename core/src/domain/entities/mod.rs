//! Domain entities representing requests sent to the external validator.

pub mod request;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use request::{CheckRequest, ResyncRequest, ValidatorCommand};
