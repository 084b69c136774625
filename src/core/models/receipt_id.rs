//! Receipt identifiers

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Raised when a string is not a receipt identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed receipt id: {0}")]
pub struct ReceiptIdError(String);

/// Opaque identifier handed out when a receipt is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for ReceiptId {
    type Err = ReceiptIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ReceiptIdError(s.to_string()))
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
