//! In-process receipt storage
//!
//! Receipts live for the lifetime of the process only.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::core::models::{Receipt, ReceiptId};
use crate::core::ports::ReceiptStore;

/// [`ReceiptStore`] backed by a `HashMap` behind a reader/writer lock
///
/// `parking_lot`'s lock is eventually fair, so a steady stream of readers
/// cannot starve a writer or the other way round.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn set(&self, id: ReceiptId, receipt: Receipt) {
        self.receipts.write().insert(id, receipt);
    }

    fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.receipts.read().get(id).cloned()
    }
}
