//! Configuration handling for knight-paths
//!
//! A config file supplies defaults for the search. Files ending in `.toml` are
//! read as TOML, anything else as JSON:
//!
//! ```json
//! { "start": "a1", "end": "h8", "width": 8, "height": 8, "max_paths": 1000 }
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Board, BoardError, SearchOptions, STANDARD_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .0.display())]
    Read(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// File format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Search configuration loaded from a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start square identifier
    pub start: Option<String>,

    /// End square identifier
    pub end: Option<String>,

    /// Board width (default 8)
    pub width: Option<u32>,

    /// Board height (default 8)
    pub height: Option<u32>,

    /// Fail instead of listing more paths than this
    pub max_paths: Option<usize>,
}

impl Config {
    /// Loads configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| ConfigError::Read(path.to_path_buf()))?;

        Self::parse(&content, ConfigFormat::from_path(path))
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses configuration text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        };
        Ok(config)
    }

    /// Overlays `other` on top of this config; values set in `other` win
    pub fn merge(self, other: Config) -> Config {
        Config {
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            max_paths: other.max_paths.or(self.max_paths),
        }
    }

    /// Builds the board, defaulting missing dimensions to 8
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::new(
            self.width.unwrap_or(STANDARD_SIZE),
            self.height.unwrap_or(STANDARD_SIZE),
        )
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_paths: self.max_paths,
        }
    }

    /// Serializes the configuration in the given format
    pub fn serialize_as(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize config")
            }
            ConfigFormat::Toml => toml::to_string_pretty(self).context("Failed to serialize config"),
        }
    }

    /// Writes the configuration to a file, picking the format from its extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.serialize_as(ConfigFormat::from_path(path))?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
