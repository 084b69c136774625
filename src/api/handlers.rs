//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::{Receipt, ReceiptId};
use crate::core::ports::ReceiptStore;
use crate::core::services::{breakdown, calculate_points, validate};

use super::error::ApiError;
use super::types::{BreakdownData, PointsData, ReceiptIdData, StatusData};

// =============================================================================
// STATUS
// =============================================================================

/// Get service status
#[must_use]
pub const fn get_status() -> StatusData {
    StatusData {
        version: crate::VERSION,
    }
}

// =============================================================================
// RECEIPTS
// =============================================================================

/// Parse, validate, and store a submitted receipt
///
/// Nothing is stored unless the receipt passes both parsing and validation.
pub fn process_receipt(
    store: &dyn ReceiptStore,
    input: serde_json::Value,
) -> Result<ReceiptIdData, ApiError> {
    let receipt = Receipt::from_value(input).inspect_err(|e| log::info!("Rejected receipt: {e}"))?;
    validate(&receipt).inspect_err(|e| log::info!("Rejected receipt: {e}"))?;

    let id = ReceiptId::generate();
    store.set(id, receipt);
    log::debug!("Stored receipt {id}");

    Ok(ReceiptIdData { id: id.to_string() })
}

/// Get the points awarded to a stored receipt
pub fn get_points(store: &dyn ReceiptStore, id: &str) -> Result<PointsData, ApiError> {
    let receipt = find_receipt(store, id)?;
    Ok(PointsData {
        points: calculate_points(&receipt),
    })
}

/// Get the per-rule points breakdown of a stored receipt
pub fn get_breakdown(store: &dyn ReceiptStore, id: &str) -> Result<BreakdownData, ApiError> {
    let receipt = find_receipt(store, id)?;
    Ok(BreakdownData {
        points: calculate_points(&receipt),
        rules: breakdown(&receipt),
    })
}

// =============================================================================
// HELPERS
// =============================================================================

/// Look up a receipt, treating malformed and unknown ids alike
fn find_receipt(store: &dyn ReceiptStore, id: &str) -> Result<Receipt, ApiError> {
    id.parse::<ReceiptId>()
        .ok()
        .and_then(|id| store.get(&id))
        .ok_or_else(|| ApiError::not_found(format!("No receipt found for id '{id}'")))
}
