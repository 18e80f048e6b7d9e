//! Configuration handling for schema_naming

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::strategy::digest::{DigestAlgorithm, DEFAULT_FOREIGN_KEY_DIGEST_LENGTH};

/// Load configuration from a TOML file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config = load_from_str(&config_str)?;
    tracing::debug!(path = %path.display(), digest = ?config.naming.digest, "Loaded naming configuration");

    Ok(config)
}

/// Parse configuration from TOML text
pub fn load_from_str(config_str: &str) -> Result<Config> {
    toml::from_str(config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))
}

/// Represents the complete schema_naming configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
    pub logging: Option<LoggingConfig>,
}

/// Naming strategy configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NamingConfig {
    pub digest: DigestAlgorithm,
    pub foreign_key_digest_length: usize,
    pub table_prefix: Option<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            digest: DigestAlgorithm::default(),
            foreign_key_digest_length: DEFAULT_FOREIGN_KEY_DIGEST_LENGTH,
            table_prefix: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub stdout: bool,
}

fn default_log_format() -> String {
    "text".to_string()
}
