//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_log::MAX_ENTRIES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File locations and log limits.
///
/// Every field is optional in the TOML file; missing fields take the
/// defaults, which match running with no config file at all.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the game state string is saved.
    save_file: PathBuf,

    /// Append-only event log file.
    log_file: PathBuf,

    /// Diagnostic tracing output.
    diagnostics_file: PathBuf,

    /// Entries kept in the in-memory log before the oldest are evicted.
    max_log_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("save.txt"),
            log_file: PathBuf::from("log.txt"),
            diagnostics_file: PathBuf::from("noughts.log"),
            max_log_entries: MAX_ENTRIES,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_log_entries == 0 {
            return Err(ConfigError::new(
                "max_log_entries must be at least 1".to_string(),
            ));
        }

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.save_file(), &PathBuf::from("save.txt"));
        assert_eq!(*config.max_log_entries(), 1000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("save_file = \"games/slot1.txt\"\nmax_log_entries = 50\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.save_file(), &PathBuf::from("games/slot1.txt"));
        assert_eq!(*config.max_log_entries(), 50);
        assert_eq!(config.log_file(), &PathBuf::from("log.txt"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = write_config("save_file = [");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let file = write_config("max_log_entries = 0\n");
        assert!(AppConfig::load(file.path()).is_err());
    }
}
