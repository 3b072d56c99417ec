//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional, so an empty file (or no file at all) yields a config
//! pointing at `http://localhost:3000/bets`.
//!
//! # Example
//!
//! ```no_run
//! use betsmoke::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("betsmoke.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::paths;
use crate::adapter::outbound::http::client::parse_base_url;
use crate::adapter::outbound::http::settings::{HttpConfig, TargetConfig};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `target.base_url`.
pub const BASE_URL_ENV: &str = "BETSMOKE_BASE_URL";

/// Run-level knobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    /// Seed for payload randomness; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Bets service endpoint.
    #[serde(default)]
    pub target: TargetConfig,

    /// HTTP client tuning.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Run configuration.
    #[serde(default)]
    pub run: RunConfig,

    /// File the settings were read from, `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse TOML content without environment overrides or validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Load, apply environment overrides and validate one file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.source = Some(path.to_path_buf());
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Find the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the first existing file from
    /// [`paths::candidates`] is used, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = paths::candidates().into_iter().find(|path| path.is_file()) {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.target.base_url = url;
        }
    }

    /// Check the settings that can be checked offline.
    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.target.base_url)?;

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }
}
