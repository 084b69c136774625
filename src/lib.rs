//! receipt-points - A small HTTP service that stores purchase receipts and
//! scores them
//!
//! This library provides receipt parsing and validation, the points rule
//! engine, a concurrency-safe in-memory receipt store, and the HTTP layer
//! that ties them together.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod server;
