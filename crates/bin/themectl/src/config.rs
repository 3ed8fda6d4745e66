//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `folio.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persisted preference settings.
    pub storage: StorageConfig,
    /// Rendering surface settings.
    pub style: StyleConfig,
    /// OS signal watching settings.
    pub signal: SignalConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the preference is persisted.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON key/value file.
    pub path: PathBuf,
}

/// Where the theme marker is written.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Class-list file standing in for the document root.
    pub path: PathBuf,
}

/// OS color scheme watcher.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Delay between two OS queries while watching, in milliseconds.
    pub poll_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `folio.toml`, if present) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
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

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FOLIO_STORAGE_PATH") {
            self.storage.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("FOLIO_STYLE_PATH") {
            self.style.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("FOLIO_POLL_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                self.signal.poll_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("FOLIO_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.signal.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Delay between two OS color scheme queries.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.signal.poll_interval_ms)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("folio-theme.json"),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("folio-theme.class"),
        }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "themectl=info,folio=info".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.path, PathBuf::from("folio-theme.json"));
        assert_eq!(config.style.path, PathBuf::from("folio-theme.class"));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.logging.filter, "themectl=info,folio=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.signal.poll_interval_ms, 1000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [storage]
            path = '/var/lib/folio/theme.json'

            [style]
            path = '/run/folio/root.class'

            [signal]
            poll_interval_ms = 250

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.storage.path,
            PathBuf::from("/var/lib/folio/theme.json")
        );
        assert_eq!(config.style.path, PathBuf::from("/run/folio/root.class"));
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [signal]
            poll_interval_ms = 50
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.signal.poll_interval_ms, 50);
        assert_eq!(config.storage.path, PathBuf::from("folio-theme.json"));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.signal.poll_interval_ms, 1000);
    }

    #[test]
    fn should_read_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[style]\npath = 'custom.class'\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.style.path, PathBuf::from("custom.class"));
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.signal.poll_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_default_poll_interval() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "invalid {{{").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
