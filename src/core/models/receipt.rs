//! Receipt and item shapes
//!
//! Structural parsing lives here: turning raw JSON into a [`Receipt`] with
//! typed date and time fields. Content rules are enforced separately by
//! [`validate`](crate::core::services::validate).

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::datetime::{PurchaseDate, PurchaseTime};

/// Errors raised while decoding raw input into a [`Receipt`]
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input did not decode into the receipt shape
    ///
    /// Date and time layout failures surface here too, with the field name
    /// and expected layout in the message.
    #[error("invalid receipt: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One purchase event submitted for scoring
///
/// Absent fields decode to empty values so that a receipt missing, say,
/// `retailer` reaches validation and is rejected there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name
    #[serde(default)]
    pub retailer: String,
    /// Day of purchase; `None` only when the field was absent
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_date: Option<PurchaseDate>,
    /// Time of purchase; `None` only when the field was absent
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_time: Option<PurchaseTime>,
    /// Line items, in receipt order
    #[serde(default)]
    pub items: Vec<Item>,
    /// Amount paid, e.g. `"35.35"`
    #[serde(default)]
    pub total: String,
}

/// One line entry on a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description as printed
    #[serde(default)]
    pub short_description: String,
    /// Price paid, e.g. `"6.49"`
    #[serde(default)]
    pub price: String,
}

impl Item {
    /// Create an item from a description and price string
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Decode a field that is present in the input
///
/// Absence is handled by `#[serde(default)]`; an explicit `null` goes through
/// the inner type and is rejected there.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Receipt {
    /// Decode a receipt from JSON text
    pub fn from_json(raw: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode a receipt from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        Ok(serde_json::from_value(value)?)
    }
}
