//! Command implementations

mod score;
mod serve;
mod validate;

pub use score::score;
pub use serve::serve;
pub use validate::validate;

use std::fs;
use std::io::{self, Read as _};

use anyhow::Context;

/// Read a receipt file, with `-` meaning stdin
fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read receipt from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read receipt file {file}"))
    }
}
