//! Receipt content validation
//!
//! Runs after structural parsing. Checks are evaluated in a fixed order and
//! the first failure is returned.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::Receipt;

// ASCII `\w` and `\s` spelled out; the regex crate's shorthand classes are
// Unicode-aware.

/// Pattern a retailer name must match
pub const RETAILER_PATTERN: &str = r"^[0-9A-Za-z_\t\n\x0C\r \-&]+$";

/// Pattern an item description must match
pub const SHORT_DESCRIPTION_PATTERN: &str = r"^[0-9A-Za-z_\t\n\x0C\r \-]+$";

/// Pattern a total or item price must match
pub const PRICE_PATTERN: &str = r"^[0-9]+\.[0-9]{2}$";

static RETAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RETAILER_PATTERN).expect("valid retailer regex"));
static SHORT_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SHORT_DESCRIPTION_PATTERN).expect("valid short description regex")
});
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRICE_PATTERN).expect("valid price regex"));

/// The first content rule a receipt broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Retailer empty or containing characters outside the allowed set
    #[error("invalid retailer format")]
    InvalidRetailer,

    /// No purchase date was decoded
    #[error("invalid purchase date format")]
    MissingPurchaseDate,

    /// No purchase time was decoded
    #[error("invalid purchase time format")]
    MissingPurchaseTime,

    /// Total is not of the form `D.CC`
    #[error("invalid total format")]
    InvalidTotal,

    /// Item list is empty
    #[error("there must be at least one item in receipt")]
    NoItems,

    /// Item description empty or containing disallowed characters
    #[error("invalid short description format for item {index}")]
    InvalidShortDescription {
        /// Zero-based position of the item
        index: usize,
    },

    /// Item price is not of the form `D.CC`
    #[error("invalid price format for item {index}")]
    InvalidPrice {
        /// Zero-based position of the item
        index: usize,
    },
}

/// Check every content rule on `receipt`, failing on the first violation
///
/// Date and time layouts are enforced during parsing; the presence checks
/// here catch receipts built in code with those fields left empty.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if !RETAILER.is_match(&receipt.retailer) {
        return Err(ValidationError::InvalidRetailer);
    }
    if receipt.purchase_date.is_none() {
        return Err(ValidationError::MissingPurchaseDate);
    }
    if receipt.purchase_time.is_none() {
        return Err(ValidationError::MissingPurchaseTime);
    }
    if !is_valid_price(&receipt.total) {
        return Err(ValidationError::InvalidTotal);
    }
    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !SHORT_DESCRIPTION.is_match(&item.short_description) {
            return Err(ValidationError::InvalidShortDescription { index });
        }
        if !is_valid_price(&item.price) {
            return Err(ValidationError::InvalidPrice { index });
        }
    }

    Ok(())
}

/// Whether `price` is a currency string like `"12.50"`
#[must_use]
pub fn is_valid_price(price: &str) -> bool {
    PRICE.is_match(price)
}
