//! Project Configuration
//!
//! Handles parsing and management of algorithms.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::sorting::quick_sort::{QuickSort, INSERTION_CUTOFF};
use crate::sorting::SortAlgorithm;

/// Name of the configuration file searched for by [`AlgoConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "algorithms.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching algorithms.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlgoConfig {
    /// Sorting defaults
    #[serde(default)]
    pub sort: SortConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl AlgoConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: AlgoConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    ///
    /// Falls back to defaults when no file exists up to the filesystem root.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Defaults for `algo sort`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub algorithm: SortAlgorithm,

    /// Quicksort insertion-sort cutoff
    #[serde(default = "default_cutoff")]
    pub cutoff: usize,

    /// Fixed pivot seed; random per run when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_cutoff() -> usize {
    INSERTION_CUTOFF
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            algorithm: SortAlgorithm::default(),
            cutoff: default_cutoff(),
            seed: None,
        }
    }
}

impl SortConfig {
    pub fn quick_sort(&self) -> QuickSort {
        QuickSort::with_cutoff(self.cutoff)
    }
}

/// Output formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON objects instead of plain lines
    #[serde(default)]
    pub json: bool,
}
