//! Tunable thresholds for the analytics passes

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Configuration for story analysis
///
/// Every field has a default; a YAML file only needs the keys it overrides:
///
/// ```yaml
/// long_life_above: 90
/// top_locations: 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Lifespans strictly below this are tagged `early_death`
    pub early_death_below: i32,
    /// Lifespans strictly above this are tagged `long_life`
    pub long_life_above: i32,
    /// A family with at least this many children is a large family
    pub large_family_min_children: usize,
    /// Years per generation when estimating generation count
    pub years_per_generation: i32,
    /// How many locations to report as most common
    pub top_locations: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryConfig {
    pub fn new() -> Self {
        Self {
            early_death_below: 50,
            long_life_above: 85,
            large_family_min_children: 8,
            years_per_generation: 25,
            top_locations: 5,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
