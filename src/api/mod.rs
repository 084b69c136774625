//! HTTP-agnostic API layer
//!
//! This module provides typed response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`,
//! axum, etc.) or directly by other clients.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input and a store, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{get_breakdown, get_points, get_status, process_receipt};
pub use types::{BreakdownData, ErrorResponse, PointsData, ReceiptIdData, StatusData};
