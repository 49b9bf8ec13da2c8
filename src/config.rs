//! Configuration file support for stock-fetcher.
//!
//! Provides YAML-based configuration through `stock-fetcher.config.yml`
//! files: data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use stock_fetcher::shared::error::StockFetcherError;
use stock_fetcher::shared::Result;
use stock_fetcher::stock_display::domain::IdentifierMode;

pub const CONFIG_FILENAME: &str = "stock-fetcher.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mode: Option<String>,
    pub base_url: Option<String>,
    pub path_prefix: Option<String>,
    pub file_name: Option<String>,
    pub placeholder_image: Option<String>,
    pub stylesheet: Option<String>,
    pub primary_col: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `mode`, if set. Only valid after `validate_config`.
    pub fn identifier_mode(&self) -> Option<IdentifierMode> {
        self.mode
            .as_deref()
            .and_then(|mode| IdentifierMode::from_str(mode).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(mode) = config.mode.as_deref() {
        IdentifierMode::from_str(mode).map_err(|message| StockFetcherError::InvalidConfig {
            message,
            hint: "Use 'mode: dealer' or 'mode: endpoint'.".to_string(),
        })?;
    }

    if let Some(base_url) = config.base_url.as_deref() {
        if base_url.trim().is_empty() {
            return Err(StockFetcherError::InvalidConfig {
                message: "base_url must not be empty.".to_string(),
                hint: "Remove the field to use the default stock bucket.".to_string(),
            }
            .into());
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StockFetcherError::InvalidConfig {
                message: format!("base_url '{}' is not an http(s) URL.", base_url),
                hint: "Use an absolute URL such as https://example.com/stock.".to_string(),
            }
            .into());
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(StockFetcherError::InvalidConfig {
            message: "timeout_secs must be greater than 0.".to_string(),
            hint: "Remove the field to use the default of 30 seconds.".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
