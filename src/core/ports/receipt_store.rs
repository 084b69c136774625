//! Receipt store port
//!
//! Defines the interface for keeping scored receipts between submission and
//! lookup.

use super::super::models::{Receipt, ReceiptId};

/// Mapping from receipt identifier to stored receipt
///
/// Implementations must let any number of `get` calls run in parallel while
/// a `set` has exclusive access for its critical section, and a `get` that
/// happens after a `set` must observe it. Identifiers are produced by the
/// caller; stores never generate or check them.
pub trait ReceiptStore: Send + Sync {
    /// Insert or overwrite the receipt stored under `id`
    fn set(&self, id: ReceiptId, receipt: Receipt);

    /// A copy of the receipt stored under `id`, or `None` if absent
    fn get(&self, id: &ReceiptId) -> Option<Receipt>;
}
