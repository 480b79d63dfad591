use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::statblock::labels::LabelTable;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// Types
// ============================================================================

/// Top-level importer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    pub parser: ParserConfig,
    /// Label overrides for non-English rulebooks.
    pub labels: LabelTable,
}

/// Parser behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Regex alternation of bullet glyphs separating special abilities.
    pub bullet_delimiter: String,
    /// Special abilities are `@`-prefixed instead of bulleted.
    pub use_modified_special_abilities: bool,
    pub custom_stats: Vec<CustomStat>,
    /// Separator between statblocks in multi-actor input.
    pub actor_delimiter: String,
}

/// A game-system stat the statblock may carry beyond the core rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStat {
    pub label: String,
    #[serde(default)]
    pub dtype: StatType,
}

/// How a custom stat's text is coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    #[default]
    String,
    Number,
    Die,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            bullet_delimiter: "•|".to_string(),
            use_modified_special_abilities: false,
            custom_stats: Vec::new(),
            actor_delimiter: "---".to_string(),
        }
    }
}

impl CustomStat {
    pub fn new(label: impl Into<String>, dtype: StatType) -> Self {
        Self {
            label: label.into(),
            dtype,
        }
    }
}

impl ImporterConfig {
    /// Load configuration from `<config dir>/statblock-importer/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::from_path(&config_path) {
            Ok(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Err(ConfigError::Io { .. }) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("statblock-importer").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
