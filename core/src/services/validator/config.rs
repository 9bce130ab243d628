//! Configuration for the validator adapter

use motp_shared::config::ValidatorConfig;

/// How commands are rendered for the external validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Flags placed before the username of a password check
    pub check_flags: Vec<String>,
    /// Flag that selects resynchronization mode
    pub resync_flag: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            check_flags: Vec::new(),
            resync_flag: String::from("-resync"),
        }
    }
}

impl From<&ValidatorConfig> for AdapterConfig {
    fn from(config: &ValidatorConfig) -> Self {
        Self {
            check_flags: config.check_flags.clone(),
            resync_flag: config.resync_flag.clone(),
        }
    }
}
