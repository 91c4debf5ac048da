//! TOML configuration for the `milan` CLI.
//!
//! Every key is optional. Precedence, highest first: CLI flags, the file
//! named by `--config` (or `MILAN_CONFIG`), built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Default `EnvFilter` directive when neither `MILAN_LOG` nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "milan=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MilanConfig {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Reject unknown nakshatra/rashi names instead of defaulting them.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Effective settings for one invocation, after CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub strict: bool,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl MilanConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply CLI flags. `--strict` can only switch strict mode on.
    pub fn settings(&self, strict_flag: bool, format: Option<OutputFormat>) -> RunSettings {
        RunSettings {
            strict: strict_flag || self.matching.strict,
            format: format.unwrap_or(self.output.format),
            pretty: self.output.pretty,
        }
    }
}
