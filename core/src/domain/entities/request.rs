//! Validator requests and their command-line rendering.

use serde::{Deserialize, Serialize};

/// A single password check for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Username as known to the validator
    pub username: String,

    /// One-time code presented by the user
    pub otp: String,
}

impl CheckRequest {
    pub fn new(username: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            otp: otp.into(),
        }
    }
}

/// Two consecutive codes used to realign the validator's counter or clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResyncRequest {
    /// Username as known to the validator
    pub username: String,

    /// First code of the consecutive pair
    pub otp1: String,

    /// Second code of the consecutive pair
    pub otp2: String,
}

impl ResyncRequest {
    pub fn new(
        username: impl Into<String>,
        otp1: impl Into<String>,
        otp2: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            otp1: otp1.into(),
            otp2: otp2.into(),
        }
    }
}

/// Operation requested from the external validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ValidatorCommand {
    Check(CheckRequest),
    Resync(ResyncRequest),
}

impl ValidatorCommand {
    /// Short name used in logs
    pub fn mode(&self) -> &'static str {
        match self {
            ValidatorCommand::Check(_) => "check",
            ValidatorCommand::Resync(_) => "resync",
        }
    }

    /// Username the command applies to
    pub fn username(&self) -> &str {
        match self {
            ValidatorCommand::Check(request) => &request.username,
            ValidatorCommand::Resync(request) => &request.username,
        }
    }

    /// Render the command as validator arguments.
    ///
    /// Values are passed through verbatim; empty strings stay as empty
    /// arguments so the validator sees exactly what the caller supplied.
    ///
    /// * check: `[check_flags.., username, otp]`
    /// * resync: `[resync_flag, username, otp1, otp2]`
    pub fn to_args(&self, check_flags: &[String], resync_flag: &str) -> Vec<String> {
        match self {
            ValidatorCommand::Check(request) => {
                let mut args = Vec::with_capacity(check_flags.len() + 2);
                args.extend(check_flags.iter().cloned());
                args.push(request.username.clone());
                args.push(request.otp.clone());
                args
            }
            ValidatorCommand::Resync(request) => vec![
                resync_flag.to_string(),
                request.username.clone(),
                request.otp1.clone(),
                request.otp2.clone(),
            ],
        }
    }
}

impl From<CheckRequest> for ValidatorCommand {
    fn from(request: CheckRequest) -> Self {
        ValidatorCommand::Check(request)
    }
}

impl From<ResyncRequest> for ValidatorCommand {
    fn from(request: ResyncRequest) -> Self {
        ValidatorCommand::Resync(request)
    }
}
