//! Configuration management for neo.
//!
//! Configuration is read from an optional YAML file (`neo.yaml` in the
//! working directory unless `--config` points elsewhere). Every value has a
//! default, and command-line flags override what the file says.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "neo.yaml";

/// Default path of the NEO CSV file
pub const DEFAULT_NEOS_PATH: &str = "data/neos.csv";

/// Default path of the close-approach JSON file
pub const DEFAULT_APPROACHES_PATH: &str = "data/cad.json";

/// Default maximum number of query results
pub const DEFAULT_LIMIT: usize = 10;

/// Configuration file structure for neo
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct NeoConfig {
    /// Data file locations
    pub data: DataConfig,

    /// Query defaults
    pub query: QueryConfig,

    /// Output settings
    pub output: OutputSettings,
}

/// Data file section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DataConfig {
    /// Path to the NEO CSV file
    pub neos: PathBuf,

    /// Path to the close-approach JSON file
    pub approaches: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            neos: PathBuf::from(DEFAULT_NEOS_PATH),
            approaches: PathBuf::from(DEFAULT_APPROACHES_PATH),
        }
    }
}

/// Query section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct QueryConfig {
    /// Limit applied when `--limit` is not given; 0 means unlimited
    pub default_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Output section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputSettings {
    /// Whether to colorize terminal output
    pub colors: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl NeoConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, falling back to defaults.
    ///
    /// An explicitly requested file must exist. Without one, `neo.yaml` in
    /// `working_dir` is used if present.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::load(path);
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            Self::load(&candidate)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
