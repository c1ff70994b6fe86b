use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PassbookError;

pub const DEFAULT_CONFIG_FILE: &str = "passbook.toml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PassbookConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    "data.json".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PassbookConfig {
    /// Read a TOML config. `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, PassbookError> {
        if !path.exists() {
            return Ok(None);
        }
        let s = std::fs::read_to_string(path)
            .map_err(|e| PassbookError::Config(format!("reading {}: {}", path.display(), e)))?;
        Self::parse(&s).map(Some)
    }

    pub fn parse(s: &str) -> Result<Self, PassbookError> {
        toml::from_str(s).map_err(|e| PassbookError::Config(e.to_string()))
    }
}
