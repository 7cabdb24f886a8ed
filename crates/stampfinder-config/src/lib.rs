//! Configuration system for StampFinder.
//!
//! Load engine settings, catalog locations and default combination options
//! from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use stampfinder_config::FinderConfig;
//!
//! let config = FinderConfig::from_toml_str(r#"
//!     [engine]
//!     max_results_per_cell = 50
//!     random_seed = 7
//!
//!     [catalog]
//!     stamps_path = "data/stamps.json"
//!     shops_path = "data/shops.json"
//!
//!     [defaults]
//!     n_of_stamps = 3
//! "#).unwrap();
//!
//! assert_eq!(config.engine.max_results_per_cell, 50);
//! assert_eq!(config.engine.random_seed, Some(7));
//! assert_eq!(config.defaults.n_of_stamps, 3);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use stampfinder_config::FinderConfig;
//!
//! let config = FinderConfig::load("stampfinder.toml").unwrap_or_default();
//! assert_eq!(config.engine.max_results_per_cell, 100);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of entries kept per DP cell.
pub const DEFAULT_MAX_RESULTS_PER_CELL: usize = 100;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main StampFinder configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FinderConfig {
    /// Combination engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Catalog feed locations.
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,

    /// Defaults for combination options not given explicitly.
    #[serde(default)]
    pub defaults: ComboDefaults,
}

impl FinderConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed used to pick combination representatives.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.engine.random_seed = Some(seed);
        self
    }

    /// Sets the number of entries kept per DP cell.
    pub fn with_max_results_per_cell(mut self, max: usize) -> Self {
        self.engine.max_results_per_cell = max;
        self
    }

    /// Sets the catalog feed locations.
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.max_results_per_cell == 0 {
            return Err(ConfigError::Invalid(
                "engine.max_results_per_cell must be at least 1".to_string(),
            ));
        }
        if self.defaults.n_of_stamps == 0 {
            return Err(ConfigError::Invalid(
                "defaults.n_of_stamps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Combination engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Entries kept per (layer, value) cell after pruning.
    #[serde(default = "default_max_results_per_cell")]
    pub max_results_per_cell: usize,

    /// Random seed for reproducible representative selection.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_max_results_per_cell() -> usize {
    DEFAULT_MAX_RESULTS_PER_CELL
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results_per_cell: DEFAULT_MAX_RESULTS_PER_CELL,
            random_seed: None,
        }
    }
}

/// Catalog feed locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Stamps feed (JSON array).
    pub stamps_path: PathBuf,

    /// Shops feed (JSON array).
    pub shops_path: PathBuf,

    /// Prefix prepended to every stamp image path.
    #[serde(default)]
    pub image_base_url: String,
}

/// Defaults for combination options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ComboDefaults {
    /// Stamps per combination.
    #[serde(default = "default_n_of_stamps")]
    pub n_of_stamps: usize,

    /// Earliest issue year accepted; `None` accepts every year.
    #[serde(default = "default_min_year")]
    pub min_year: Option<i32>,

    /// Ranking as `"<field>-<order>"`, e.g. `"width-asc"`.
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_n_of_stamps() -> usize {
    2
}

fn default_min_year() -> Option<i32> {
    Some(1998)
}

fn default_sort() -> String {
    "width-asc".to_string()
}

impl Default for ComboDefaults {
    fn default() -> Self {
        Self {
            n_of_stamps: default_n_of_stamps(),
            min_year: default_min_year(),
            sort: default_sort(),
        }
    }
}
