//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] tags to status
//! codes and serialises the message into the wire envelope. Classification
//! always switches on the tag, never on error identity.

use serde::{Deserialize, Serialize};

/// Stable machine-readable tag describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input the domain recognises as malformed or semantically invalid.
    InvalidArgument,
    /// The referenced entity does not exist.
    NotFound,
    /// A required path identifier was absent or empty.
    BadRoute,
    /// The request body could not be decoded.
    MalformedBody,
    /// Any other failure.
    Internal,
}

/// Error value carried from the domain ports to the transport encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with an explicit tag.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable tag.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// A missing or empty path identifier. Carries the fixed message the
    /// router contract promises.
    pub fn bad_route() -> Self {
        Self::new(ErrorCode::BadRoute, "bad route")
    }

    /// Convenience constructor for [`ErrorCode::MalformedBody`].
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedBody, message)
    }

    /// Convenience constructor for [`ErrorCode::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
