//! External validator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How to reach and drive the multiOTP command-line validator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Path to the validator executable
    pub executable: PathBuf,

    /// Working directory for the validator process (inherited when unset)
    pub working_dir: Option<PathBuf>,

    /// Seconds to wait for the validator before killing it (0 = wait forever)
    pub timeout_secs: u64,

    /// Arguments placed before every command, e.g. `-log`
    pub base_args: Vec<String>,

    /// Extra flags placed before the username of a password check
    pub check_flags: Vec<String>,

    /// Flag that switches the validator into resynchronization mode
    pub resync_flag: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(default_executable()),
            working_dir: None,
            timeout_secs: 30,
            base_args: Vec::new(),
            check_flags: Vec::new(),
            resync_flag: String::from("-resync"),
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration for a specific executable
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            ..Default::default()
        }
    }

    /// Set the timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the arguments placed before every command
    pub fn with_base_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Timeout as a duration, `None` when disabled
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.timeout_secs > 0).then(|| std::time::Duration::from_secs(self.timeout_secs))
    }
}

fn default_executable() -> &'static str {
    if cfg!(windows) {
        "multiotp.exe"
    } else {
        "multiotp"
    }
}
