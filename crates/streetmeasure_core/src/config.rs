//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe logging, storage and display settings in one JSON document.
//! - Validate settings before any subsystem is started.
//!
//! # Invariants
//! - An invalid display unit step fails loading; it is never clamped.
//! - Missing fields fall back to [`CoreConfig::default`] values.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::model::display_unit::DisplayUnit;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Database file name used when `db_path` is not configured.
pub const DEFAULT_DB_FILE_NAME: &str = "streetmeasure.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// Malformed JSON or invalid field values, including display unit steps.
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings for one application instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// SQLite file holding saved records; `None` keeps records in memory.
    pub db_path: Option<PathBuf>,
    pub display_unit: DisplayUnit,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            db_path: None,
            display_unit: DisplayUnit::default(),
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - [`ConfigError::Parse`] for malformed JSON or an invalid display unit.
    /// - [`ConfigError::Invalid`] for unsupported log level or log directory.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    /// - [`ConfigError::Io`] when the file cannot be read.
    /// - Otherwise the same errors as [`CoreConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        info!(
            "event=config_load module=config status=ok level={} file_logging={} persistent_db={}",
            config.log_level,
            config.log_dir.is_some(),
            config.db_path.is_some()
        );
        Ok(config)
    }

    /// Checks settings shared with logging bootstrap.
    ///
    /// # Errors
    /// - [`ConfigError::Invalid`] with the same message logging init would return.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        if let Some(log_dir) = &self.log_dir {
            let log_dir = log_dir.to_str().ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "log_dir must be valid UTF-8, got `{}`",
                    log_dir.display()
                ))
            })?;
            normalize_log_dir(log_dir).map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }

    /// Database path, defaulting to [`DEFAULT_DB_FILE_NAME`] under `data_dir`.
    pub fn db_path_or_default(&self, data_dir: &Path) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_DB_FILE_NAME))
    }
}
