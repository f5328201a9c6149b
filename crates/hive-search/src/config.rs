use anyhow::{Context, Result};
use confyg::{env, Confygery};
use hive_core::Catalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::suggestions::ThresholdFilter;
use crate::summary::SummaryStore;

/// Configuration for hive.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (HIVE_* prefix)
/// 3. Config file (~/.config/hive/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the library definitions.
    ///
    /// Can be set via:
    /// - CLI: --catalog-dir /path/to/libs
    /// - ENV: HIVE_CATALOG_DIR
    /// - Config: catalog_dir = "/path/to/libs"
    /// - Default: ~/.local/share/hive/libs
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,

    /// Path to the summary cache file.
    ///
    /// Can be set via:
    /// - CLI: --summary /path/to/summary.json
    /// - ENV: HIVE_SUMMARY_PATH
    /// - Config: summary_path = "/path/to/summary.json"
    /// - Default: ~/.local/share/hive/summary.json
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,

    /// Ratings must be strictly above this value to be suggested.
    #[serde(default)]
    pub suggestion_threshold: f64,

    /// Maximum number of suggestions shown; 0 shows all qualifying ones.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    #[serde(default)]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            summary_path: default_summary_path(),
            suggestion_threshold: 0.0,
            suggestion_limit: default_suggestion_limit(),
            logging: twyg::Opts::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/hive/config.toml
    /// Reads environment variables with HIVE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("hive");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// The catalog described by this configuration.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.catalog_dir)
    }

    /// The summary store described by this configuration.
    pub fn summary_store(&self) -> SummaryStore {
        SummaryStore::new(self.catalog(), &self.summary_path)
    }

    /// The suggestion filter described by this configuration.
    pub fn suggestion_filter(&self) -> ThresholdFilter {
        ThresholdFilter::new(self.suggestion_threshold).with_limit(self.suggestion_limit)
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hive")
}

/// Get the default catalog directory.
///
/// Returns: ~/.local/share/hive/libs (or platform equivalent)
fn default_catalog_dir() -> PathBuf {
    data_dir().join("libs")
}

/// Get the default summary cache path.
///
/// Returns: ~/.local/share/hive/summary.json (or platform equivalent)
fn default_summary_path() -> PathBuf {
    data_dir().join("summary.json")
}

fn default_suggestion_limit() -> usize {
    10
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/hive/config.toml
/// - macOS: ~/Library/Application Support/hive/config.toml
/// - Windows: %APPDATA%\hive\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hive")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Hive Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (HIVE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory containing library definitions, one <author>/<name>.json each
#
# Can also be set via:
# - CLI: hive --catalog-dir /path/to/libs search foo
# - Environment: HIVE_CATALOG_DIR=/path/to/libs
#
# Default: Platform-specific data directory
#catalog_dir = "/path/to/libs"

# Summary cache built from the catalog on first search
#
# Delete this file or run 'hive rebuild' after editing definitions.
#
# Can also be set via:
# - CLI: hive --summary /path/to/summary.json search foo
# - Environment: HIVE_SUMMARY_PATH=/path/to/summary.json
#
# Default: Platform-specific data directory
#summary_path = "/path/to/summary.json"

# Similarity ratings (0.0 - 1.0) must be above this value to be suggested
suggestion_threshold = 0.0

# Maximum number of suggestions to show (0 = no limit)
suggestion_limit = 10
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog_dir.ends_with("libs"));
        assert!(config.summary_path.ends_with("summary.json"));
        assert_eq!(config.suggestion_limit, 10);
        assert!(config.suggestion_threshold.abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_components_use_configured_paths() {
        let config = Config {
            catalog_dir: PathBuf::from("/tmp/hive/libs"),
            summary_path: PathBuf::from("/tmp/hive/summary.json"),
            ..Config::default()
        };

        assert_eq!(config.catalog().dir(), config.catalog_dir.as_path());
        assert_eq!(config.summary_store().path(), config.summary_path.as_path());
    }
}
