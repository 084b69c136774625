//! Core domain logic for receipt scoring
//!
//! This module contains pure business logic with no I/O dependencies.
//! State is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Receipt, Item, `PurchaseDate`, `PurchaseTime`, `ReceiptId`)
//! - `services/` - Validation and the points rule engine
//! - `ports/` - Trait definitions for stateful dependencies

pub mod models;
pub mod ports;
pub mod services;
