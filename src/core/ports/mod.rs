//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic and the
//! stateful parts of the system.
//!
//! Implementations live in the `adapters` module.

mod receipt_store;

pub use receipt_store::ReceiptStore;
