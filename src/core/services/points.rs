//! Points rule engine
//!
//! A receipt's score is the sum of independent rules, each a pure function
//! over the receipt. The engine assumes the receipt already passed
//! [`validate`](super::validate); fields that fail to parse contribute 0
//! instead of raising an error.
//!
//! # Examples
//!
//! ```
//! use receipt_points::core::models::{Item, Receipt};
//! use receipt_points::core::services::calculate_points;
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".parse().ok(),
//!     purchase_time: "14:33".parse().ok(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//! assert_eq!(calculate_points(&receipt), 109);
//! ```

use serde::Serialize;

use crate::core::models::{Receipt, money};

/// A scoring function over a receipt
pub type ReceiptRule = fn(&Receipt) -> u64;

/// A named rule in the engine's table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier used in breakdowns
    pub name: &'static str,
    /// The scoring function
    pub apply: ReceiptRule,
}

/// Every rule, in evaluation order
pub const RULES: [Rule; 7] = [
    Rule { name: "retailer", apply: retailer_rule },
    Rule { name: "round_total", apply: round_total_rule },
    Rule { name: "quarter_multiple", apply: quarter_multiple_rule },
    Rule { name: "item_pairs", apply: item_pairs_rule },
    Rule { name: "description_length", apply: description_length_rule },
    Rule { name: "odd_day", apply: odd_day_rule },
    Rule { name: "afternoon", apply: afternoon_rule },
];

/// Points contributed by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleScore {
    /// Rule name from [`RULES`]
    pub rule: &'static str,
    /// Points the rule awarded
    pub points: u64,
}

/// Total points for `receipt`
#[must_use]
pub fn calculate_points(receipt: &Receipt) -> u64 {
    RULES
        .iter()
        .fold(0, |total, rule| total.saturating_add((rule.apply)(receipt)))
}

/// Per-rule contributions for `receipt`, in evaluation order
#[must_use]
pub fn breakdown(receipt: &Receipt) -> Vec<RuleScore> {
    RULES
        .iter()
        .map(|rule| RuleScore {
            rule: rule.name,
            points: (rule.apply)(receipt),
        })
        .collect()
}

/// One point per letter or digit in the retailer name
#[must_use]
pub fn retailer_rule(receipt: &Receipt) -> u64 {
    receipt.retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 50 points if the total has no cents
#[must_use]
pub fn round_total_rule(receipt: &Receipt) -> u64 {
    match money::cents(&receipt.total) {
        Some(0) => 50,
        _ => 0,
    }
}

/// 25 points if the total is a non-zero multiple of 0.25
#[must_use]
pub fn quarter_multiple_rule(receipt: &Receipt) -> u64 {
    match money::as_f64(&receipt.total) {
        Some(total) if total >= 0.25 && total % 0.25 == 0.0 => 25,
        _ => 0,
    }
}

/// 5 points for every two items
#[must_use]
pub fn item_pairs_rule(receipt: &Receipt) -> u64 {
    (receipt.items.len() / 2) as u64 * 5
}

/// For each item whose trimmed description length is a multiple of 3,
/// the price times 0.2 rounded up
#[must_use]
pub fn description_length_rule(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .filter_map(|item| money::as_f64(&item.price))
        // Saturating cast: negative and NaN prices land on 0.
        .map(|price| (price * 0.2).ceil() as u64)
        .fold(0, u64::saturating_add)
}

/// 6 points if the purchase day is odd
#[must_use]
pub fn odd_day_rule(receipt: &Receipt) -> u64 {
    match receipt.purchase_date {
        Some(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points if purchased after 14:00 and before 16:00
#[must_use]
pub fn afternoon_rule(receipt: &Receipt) -> u64 {
    match receipt.purchase_time {
        Some(time) if time.hour() == 15 || (time.hour() == 14 && time.minute() > 0) => 10,
        _ => 0,
    }
}
