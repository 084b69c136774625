//! Validate command - check a receipt file without scoring it

use receipt_points::core::models::Receipt;
use receipt_points::core::services;
use receipt_points::output::{OutputMode, ValidateResult};

use super::read_input;

/// Parse and validate the receipt in `file`
///
/// Fails after printing the result when the receipt is rejected, so the
/// exit status reflects validity.
pub fn validate(file: &str, mode: OutputMode) -> anyhow::Result<()> {
    let raw = read_input(file)?;

    let error = match Receipt::from_json(&raw) {
        Ok(receipt) => services::validate(&receipt).err().map(|e| e.to_string()),
        Err(e) => Some(e.to_string()),
    };

    let result = ValidateResult {
        valid: error.is_none(),
        error,
    };
    result.render(mode);

    match result.error {
        Some(error) => anyhow::bail!("receipt rejected: {error}"),
        None => Ok(()),
    }
}
