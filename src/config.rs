//! Application configuration.
//!
//! Handles loading, validating, and merging `ad-resizer.toml`. Stock defaults
//! are the base layer; a user file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! By default `ad-resizer.toml` is read from the working directory if it
//! exists. Pass `--config <FILE>` to use a specific file (which must exist).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [[formats]]               # Replaces the whole catalog when present
//! id = "fb-ig-square"
//! name = "FB/IG Square"
//! width = 1080
//! height = 1080
//!
//! [[formats]]
//! id = "ig-story"
//! name = "IG Story/TikTok"
//! width = 1080
//! height = 1920
//!
//! [[formats]]
//! id = "linkedin-banner"
//! name = "LinkedIn Banner"
//! width = 1200
//! height = 628
//!
//! [png]
//! compression = "default"   # fast | default | best
//!
//! [generation]
//! min_latency_ms = 0        # Hold results back at least this long
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key; arrays (including `formats`) replace the default
//! outright. Unknown keys are rejected to catch typos early.

use crate::catalog::{FormatCatalog, stock_formats};
use crate::imaging::Compression;
use crate::types::AdFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "ad-resizer.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// The format catalog, in display and output order.
    pub formats: Vec<AdFormat>,
    /// PNG encoder settings.
    pub png: PngConfig,
    /// Batch generation settings.
    pub generation: GenerationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            formats: stock_formats(),
            png: PngConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formats.is_empty() {
            return Err(ConfigError::Validation("formats must not be empty".into()));
        }
        self.catalog().map(|_| ())
    }

    /// Build the format catalog described by this config.
    pub fn catalog(&self) -> Result<FormatCatalog, ConfigError> {
        FormatCatalog::new(self.formats.clone())
            .map_err(|e| ConfigError::Validation(format!("formats: {e}")))
    }

    pub fn min_latency(&self) -> Duration {
        Duration::from_millis(self.generation.min_latency_ms)
    }
}

/// PNG encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PngConfig {
    /// zlib effort; output pixels are identical at every level.
    pub compression: Compression,
}

/// Batch generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Minimum time before results are handed back, in milliseconds.
    pub min_latency_ms: u64,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AppConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `ad-resizer.toml` from `dir` if present, over stock defaults.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let overlay = load_raw_config(&dir.join(CONFIG_FILENAME))?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Load a specific config file, which must exist.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Ad Resizer Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Ad formats
# ---------------------------------------------------------------------------
# The catalog of target sizes. Defining any [[formats]] entry replaces the
# whole list. Results are always produced in this order.
# Ids must be unique; width and height must be positive.
[[formats]]
id = "fb-ig-square"
name = "FB/IG Square"
width = 1080
height = 1080

[[formats]]
id = "ig-story"
name = "IG Story/TikTok"
width = 1080
height = 1920

[[formats]]
id = "linkedin-banner"
name = "LinkedIn Banner"
width = 1200
height = 628

# ---------------------------------------------------------------------------
# PNG output
# ---------------------------------------------------------------------------
[png]
# Compression effort: "fast", "default", or "best".
# Only file size and speed change; pixels are identical.
compression = "default"

# ---------------------------------------------------------------------------
# Generation
# ---------------------------------------------------------------------------
[generation]
# Hold results back for at least this many milliseconds.
min_latency_ms = 0
"##
}
