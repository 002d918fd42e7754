//! Configuration management for the CLI.
//!
//! The game only reads its configuration; it never writes the file.

use crate::error::{CliError, Result};
use mansion_domain::index::DEFAULT_BUCKETS;
use mansion_domain::DiscoveryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Presentation settings
    #[serde(default)]
    pub settings: Settings,

    /// Exploration rules
    #[serde(default)]
    pub exploration: ExplorationSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// In-memory line editor history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Exploration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationSettings {
    /// When a room's clue is recorded again
    #[serde(default)]
    pub discovery: Discovery,

    /// Bucket count of the suspect index
    #[serde(default = "default_index_buckets")]
    pub index_buckets: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Narrated text and tables
    Table,
    /// JSON report
    Json,
    /// Verdict only
    Quiet,
}

/// Clue rediscovery setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discovery {
    /// Record a room's clue on the first visit only
    #[default]
    FirstVisit,
    /// Record it again on every step spent in the room
    EveryVisit,
}

impl From<Discovery> for DiscoveryPolicy {
    fn from(discovery: Discovery) -> Self {
        match discovery {
            Discovery::FirstVisit => DiscoveryPolicy::FirstVisit,
            Discovery::EveryVisit => DiscoveryPolicy::EveryVisit,
        }
    }
}

impl Config {
    /// Config file location under `home`.
    fn path_in(home: Option<PathBuf>) -> Option<PathBuf> {
        home.map(|home| home.join(".mansion").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_in(dirs::home_dir())
    }

    fn load_in(home: Option<PathBuf>) -> Result<Self> {
        match Self::path_in(home) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.exploration.index_buckets == 0 {
            return Err(CliError::Config("index_buckets must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
        }
    }
}

impl Default for ExplorationSettings {
    fn default() -> Self {
        Self {
            discovery: Discovery::default(),
            index_buckets: default_index_buckets(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    100
}

fn default_index_buckets() -> usize {
    DEFAULT_BUCKETS
}
