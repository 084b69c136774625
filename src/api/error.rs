//! API error types with HTTP status code mapping
//!
//! Every failure a receipt request can hit is either bad input (400) or a
//! receipt that cannot be found (404).

use serde::Serialize;
use thiserror::Error;

use crate::core::models::ParseError;
use crate::core::services::ValidationError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown receipt, malformed receipt id, or unknown route (404)
    NotFound,
    /// Body that is not JSON, not a receipt, or not a valid receipt (400)
    BadRequest,
}

impl ErrorCode {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
        }
    }

    /// Code string carried in error bodies
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
        }
    }
}

/// A failed API call
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct ApiError {
    /// Determines the HTTP status
    pub code: ErrorCode,
    /// Message returned to the client
    pub message: String,
}

impl ApiError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Error details as sent in a response body
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Code string, e.g. `BAD_REQUEST`
    pub code: &'static str,
    /// Message returned to the client
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message.clone(),
        }
    }
}
