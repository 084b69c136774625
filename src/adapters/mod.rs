//! Adapter implementations for port traits
//!
//! - `memory` - In-process [`ReceiptStore`](crate::core::ports::ReceiptStore)

pub mod memory;

pub use memory::InMemoryReceiptStore;
