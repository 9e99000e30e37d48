//! Fallback configuration for locating the claude-history CLI.
//!
//! This module handles the optional `.sc/history/config.yml` file, which lets
//! an operator point the gate at a manually built or non-standard install:
//!
//! ```yaml
//! cli:
//!   path: /full/path/to/claude-history
//! ```
//!
//! Only `cli.path` matters for resolution. Unknown fields are ignored.

use crate::error::Result;
use crate::paths;
use crate::traits::ConfigSource;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Contents of the fallback configuration file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct FallbackConfig {
    /// Settings for the claude-history CLI.
    #[serde(default)]
    pub cli: Option<CliConfig>,

    /// Append every gate decision to `.sc/history/hook-events.jsonl`.
    ///
    /// Anything other than a YAML `true` leaves logging off.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub debug_logging: bool,
}

/// The `cli` section of the fallback configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Full path to the claude-history executable.
    #[serde(default)]
    pub path: Option<String>,
}

impl FallbackConfig {
    /// Load config from a specific base directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = paths::fallback_config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content).map(Some)
    }

    /// Parse config from YAML text.
    ///
    /// An empty document (or a bare `~`) parses as the default config.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a YAML mapping of the expected shape.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }

    /// The configured `cli.path`, if set to a non-blank string.
    pub fn cli_path(&self) -> Option<&str> {
        self.cli.as_ref()?.path.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Read a flag without letting a mistyped value reject the whole document.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_yaml::Value::Bool(true)))
}

/// Production [`ConfigSource`] that reads the YAML file from disk.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigSource;

impl YamlConfigSource {
    /// Create a new YAML config source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigSource for YamlConfigSource {
    fn load(&self, base_dir: &Path) -> Result<Option<FallbackConfig>> {
        FallbackConfig::load_from(base_dir)
    }
}
