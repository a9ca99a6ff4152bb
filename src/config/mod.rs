//! Configuration module for bk
//!
//! Settings are read from `<config dir>/bk/config.toml` when it exists and
//! can be overridden with `BK_`-prefixed environment variables
//! (`BK_STORE_PATH`, `BK_LOG_LEVEL`, `BK_LOG_FILE`). Loading never creates
//! the file.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tracing filter used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BkConfig {
    /// Location of the bookmarks document
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Tracing filter directive (e.g. `debug`, `bk=trace`, `off`)
    #[serde(default)]
    pub log_level: Option<String>,

    /// File that log output is appended to
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl BkConfig {
    /// Directory holding bk's files: `<config dir>/bk`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("bk"))
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location plus environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` (optional) plus environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed or holds
    /// values of the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("BK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Resolved tracing filter directive
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Resolved log file: configured path or `<cache dir>/bk/bk.log`
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("bk").join("bk.log")))
    }
}
