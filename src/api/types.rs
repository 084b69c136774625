//! API response types
//!
//! Success bodies are bare objects (`{"id": ...}`, `{"points": ...}`) so
//! existing receipt-processor clients can read them unchanged.

use serde::Serialize;

use super::error::{ApiError, ApiErrorData};
use crate::core::services::RuleScore;

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ApiErrorData,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self { error: err.into() }
    }
}

/// Response to a successful receipt submission
#[derive(Debug, Serialize)]
pub struct ReceiptIdData {
    /// Identifier to look the receipt up by
    pub id: String,
}

/// Points awarded to a stored receipt
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointsData {
    /// Total points
    pub points: u64,
}

/// Points awarded to a stored receipt, rule by rule
#[derive(Debug, Serialize)]
pub struct BreakdownData {
    /// Total points
    pub points: u64,
    /// Contribution of each rule, in evaluation order
    pub rules: Vec<RuleScore>,
}

/// Service status
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusData {
    /// Crate version serving the request
    pub version: &'static str,
}
