//! Configuration file support for splitgen.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/splitgen/config.toml`.

use crate::types::{SplitType, UnpairedAreas, WorkoutOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalogs: CatalogConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub upper: UpperConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where exercise tables are read from
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
        }
    }
}

/// Values used when a flag is not given on the command line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_true")]
    pub shuffle: bool,

    #[serde(default)]
    pub main_instructions: bool,

    #[serde(default)]
    pub core_instructions: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            main_instructions: false,
            core_instructions: false,
        }
    }
}

/// Upper split assembly settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpperConfig {
    /// Keep arm or push/pull picks that have no partner in the interleave
    #[serde(default)]
    pub append_unpaired_areas: bool,
}

/// Where the report goes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    Clipboard,
    Stdout,
}

/// Report output settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub destination: Destination,
}

// Default value functions
fn default_catalog_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("splitgen").join("exercises")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("splitgen").join("config.toml"))
    }

    /// Workout options for `split` seeded from the configured defaults
    pub fn workout_options(&self, split: SplitType) -> WorkoutOptions {
        WorkoutOptions {
            split,
            shuffle: self.defaults.shuffle,
            main_instructions: self.defaults.main_instructions,
            core_instructions: self.defaults.core_instructions,
            unpaired: if self.upper.append_unpaired_areas {
                UnpairedAreas::Append
            } else {
                UnpairedAreas::Drop
            },
        }
    }
}
