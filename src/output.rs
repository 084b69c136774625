//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::RuleScore;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of scoring a receipt file
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    /// Retailer on the receipt
    pub retailer: String,
    /// Total points
    pub points: u64,
    /// Per-rule contributions, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleScore>>,
}

impl ScoreResult {
    /// Render the result in the given output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}: {} points", self.retailer, self.points.to_string().bold());

        if let Some(rules) = &self.rules {
            println!();
            for score in rules {
                println!("  {:<20} {:>6}", score.rule, score.points);
            }
        }
    }
}

/// Result of validating a receipt file
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether the receipt was accepted
    pub valid: bool,
    /// Why the receipt was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResult {
    /// Render the result in the given output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match &self.error {
            None => println!("{}", "Receipt is valid".green()),
            Some(error) => println!("{} {error}", "Receipt rejected:".red()),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
