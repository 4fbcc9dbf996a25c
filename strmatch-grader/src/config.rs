//! Configuration management for the grader
//!
//! Loads matching and extraction settings from TOML (or JSON) and provides
//! defaults matching the behaviour of the reference metrics.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strmatch::{Location, MatchConfig, DEFAULT_PRECISION};

use crate::extract::{DEFAULT_ANSWER_PATTERN, NO_ANSWER};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Options for free-form `match` requests
    #[serde(default)]
    pub matching: MatchConfig,
    /// Options for the exact (extract, then numeric match) metric
    #[serde(default)]
    pub exact: ExactConfig,
}

/// Exact metric settings; comparison is always numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactConfig {
    #[serde(default)]
    pub location: Location,
    #[serde(default = "default_true")]
    pub ignore_case: bool,
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Regex whose first capture group is the final answer; the last match wins
    #[serde(default = "default_answer_pattern")]
    pub answer_pattern: String,
    /// Value graded when no answer could be extracted
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            location: Location::default(),
            ignore_case: true,
            precision: DEFAULT_PRECISION,
            answer_pattern: default_answer_pattern(),
            fallback: default_fallback(),
        }
    }
}

impl ExactConfig {
    /// The numeric matcher options this metric grades with
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::numeric()
            .with_location(self.location)
            .with_ignore_case(self.ignore_case)
            .with_precision(self.precision)
    }
}

// Default value functions
fn default_true() -> bool { true }
fn default_precision() -> usize { DEFAULT_PRECISION }
fn default_answer_pattern() -> String { DEFAULT_ANSWER_PATTERN.to_string() }
fn default_fallback() -> String { NO_ANSWER.to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default config location or return defaults
    pub fn load_or_default() -> Self {
        let config_paths = ["strmatch.toml", "config/strmatch.toml"];

        for path in &config_paths {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => tracing::warn!("Ignoring {}: {}", path, e),
            }
        }

        tracing::debug!("Using default configuration");
        Self::default()
    }

    /// Save configuration to a TOML file
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid answer pattern: {0}")]
    Pattern(String),
}
