//! Centralized path definitions
//!
//! ```text
//! ~/.config/receipt-points/
//! └── config.toml               # Service configuration
//! ```

use std::path::PathBuf;

/// Directory name under the user config directory
const APP_DIR: &str = "receipt-points";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/receipt-points`)
///
/// Falls back to a relative `.receipt-points` directory when the platform
/// has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".receipt-points"), |dir| dir.join(APP_DIR))
}

/// Get the global config file path (`~/.config/receipt-points/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
