//! Score command - score a receipt file offline

use receipt_points::core::models::Receipt;
use receipt_points::core::services::{breakdown, calculate_points, validate};
use receipt_points::output::{OutputMode, ScoreResult};

use super::read_input;

/// Parse, validate, and score the receipt in `file`
pub fn score(file: &str, show_breakdown: bool, mode: OutputMode) -> anyhow::Result<()> {
    let raw = read_input(file)?;
    let receipt = Receipt::from_json(&raw)?;
    validate(&receipt)?;

    ScoreResult {
        retailer: receipt.retailer.clone(),
        points: calculate_points(&receipt),
        rules: show_breakdown.then(|| breakdown(&receipt)),
    }
    .render(mode);

    Ok(())
}
