//! Numeric status vocabulary shared with OTP server clients.

use serde::{Deserialize, Serialize};

/// Coarse status classification, HTTP-like numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum StatusCode {
    /// General success
    Ok,
    /// Resynchronization succeeded
    ResyncOk,
    /// General error
    GeneralError,
    /// OTP could not be verified
    NotVerified,
    /// User or token not found
    NotFound,
    /// Required data missing from the request
    Incomplete,
    /// Unspecified error
    Unknown,
}

impl StatusCode {
    pub const fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::ResyncOk => 201,
            StatusCode::GeneralError => 400,
            StatusCode::NotVerified => 401,
            StatusCode::NotFound => 404,
            StatusCode::Incomplete => 480,
            StatusCode::Unknown => 500,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::ResyncOk)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.as_u16()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, String> {
        match value {
            200 => Ok(StatusCode::Ok),
            201 => Ok(StatusCode::ResyncOk),
            400 => Ok(StatusCode::GeneralError),
            401 => Ok(StatusCode::NotVerified),
            404 => Ok(StatusCode::NotFound),
            480 => Ok(StatusCode::Incomplete),
            500 => Ok(StatusCode::Unknown),
            other => Err(format!("Unknown status code: {}", other)),
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
