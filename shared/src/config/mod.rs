//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `validator` - External validator process configuration

pub mod environment;
pub mod validator;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use validator::ValidatorConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// External validator configuration
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create the default configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let validator = match environment {
            Environment::Development => ValidatorConfig::default(),
            Environment::Staging | Environment::Production => ValidatorConfig {
                timeout_secs: 15,
                ..ValidatorConfig::default()
            },
        };

        Self {
            environment,
            validator,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_tightens_timeout_and_logging() {
        let config = AppConfig::production();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.validator.timeout_secs, 15);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.validator, ValidatorConfig::default());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "environment": "staging", "validator": { "timeout_secs": 5 } }"#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.validator.timeout_secs, 5);
        assert_eq!(config.validator.resync_flag, "-resync");
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
