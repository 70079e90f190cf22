//! Service configuration shared by both catalog deployments.
//!
//! Precedence, lowest to highest: deployment defaults, optional TOML
//! file, the `PORT` environment variable, CLI flags (applied by the
//! binaries themselves).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or parse a service configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration for one catalog service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Port the MCP endpoint listens on.
    pub port: u16,

    /// Path to the JSON record source.
    pub data: PathBuf,
}

/// Optional overrides read from a TOML file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    data: Option<PathBuf>,
}

impl ServiceConfig {
    /// Deployment defaults.
    pub fn new(port: u16, data: impl Into<PathBuf>) -> Self {
        Self {
            port,
            data: data.into(),
        }
    }

    /// Overlay settings from a TOML file; absent keys keep defaults.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw: FileConfig = toml::from_str(&std::fs::read_to_string(path)?)?;
        if let Some(port) = raw.port {
            self.port = port;
        }
        if let Some(data) = raw.data {
            self.data = data;
        }
        Ok(self)
    }

    /// Overlay the `PORT` environment variable, if set and numeric.
    pub fn merge_env(mut self) -> Self {
        if let Ok(value) = std::env::var("PORT") {
            match value.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("ignoring non-numeric PORT value '{value}'"),
            }
        }
        self
    }

    /// Socket address string the service binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
