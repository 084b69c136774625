//! Service configuration
//!
//! Settings are read from TOML. An explicit path must exist; otherwise the
//! global config (`~/.config/receipt-points/config.toml`) is used when
//! present, and built-in defaults when not. Command-line flags override
//! whatever was loaded.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//! workers = 8
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default number of request worker threads
pub const DEFAULT_WORKERS: usize = 4;

/// Top-level service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of threads serving requests
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServiceConfig {
    /// Resolve configuration from `path`, the global config, or defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_file(path);
        }

        let global = paths::global_config();
        if global.exists() {
            log::debug!("Loading config from {}", global.display());
            Self::load_file(&global)
        } else {
            Ok(Self::default())
        }
    }

    /// Read and validate one TOML config file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate TOML config text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded values
    #[must_use]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        workers: Option<usize>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(workers) = workers {
            self.server.workers = workers;
        }
        self
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.workers == 0 {
            anyhow::bail!("server.workers must be at least 1");
        }
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }
        Ok(())
    }
}
