//! Shared configuration types for the multiOTP bridge
//!
//! This crate holds the configuration model used across the workspace:
//! - Environment detection
//! - Logging configuration
//! - External validator (multiOTP executable) configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, ValidatorConfig};
