//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `berlinclock.toml` in the working directory unless another path
//! is given. Every field has a default so the file is optional. Environment
//! variables take precedence over file values; CLI flags take precedence over
//! both (applied in `main`).

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How rendered faces are written to stdout.
    pub format: OutputFormat,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is
    /// malformed, or if an override holds an unusable value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Blank values count as unset.
    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let var = |key: &str| var(key).filter(|val| !val.trim().is_empty());
        if let Some(val) = var("BERLINCLOCK_FORMAT") {
            self.output.format = <OutputFormat as ValueEnum>::from_str(&val, true).map_err(|_| {
                ConfigError::Validation(format!("unknown output format {val:?}"))
            })?;
        }
        if let Some(val) = var("BERLINCLOCK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "berlinclock=warn,berlin_clock_app=warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
