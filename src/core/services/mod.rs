//! Business logic services
//!
//! Pure functions over domain models. Nothing here performs I/O or holds
//! state, so every service is safe to call from any thread.
//!
//! - [`validator`] - Content rules a parsed receipt must satisfy
//! - [`points`] - The points rule engine

pub mod points;
pub mod validator;

pub use points::{RULES, ReceiptRule, Rule, RuleScore, breakdown, calculate_points};
pub use validator::{ValidationError, validate};
