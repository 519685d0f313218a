//! Configuration module for watchroll
//!
//! Manages the watchlist location and output defaults. Configuration is read
//! from `config.toml` in the user's config directory, then overlaid with
//! `WATCHROLL_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Watchlist location used when neither the CLI nor the config names one
pub const DEFAULT_WATCHLIST: &str = "data/input/watchlist.csv";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 3] = ["watchlist", "quiet", "format"];

/// How a picked item is printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Six labelled lines
    #[default]
    Text,
    /// A JSON object keyed by column name
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WatchrollConfig {
    /// Path to the watchlist CSV
    #[serde(default)]
    pub watchlist: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default output format for picks
    #[serde(default)]
    pub format: OutputFormat,
}

impl WatchrollConfig {
    /// Location of the config file, if the system has a config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("watchroll").join("config.toml"))
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Self::default_path()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults apply. Without a config
    /// directory only the environment is read.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_sources(Self::default_path().as_deref())
    }

    /// Load configuration from a specific file, overlaid with the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_sources(Some(path))
    }

    fn load_sources(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
            }
            None => tracing::debug!("no config directory, skipping config file"),
        }

        let settings = builder
            .add_source(Environment::with_prefix("WATCHROLL").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = ?path, ?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the watchlist path: CLI override, then config, then default
    #[must_use]
    pub fn watchlist_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.watchlist.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WATCHLIST))
    }

    /// Read a single setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "watchlist" => Ok(self
                .watchlist
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string())),
            "quiet" => Ok(self.quiet.to_string()),
            "format" => Ok(self.format.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single setting from text
    ///
    /// An empty `watchlist` value clears the override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "watchlist" => {
                self.watchlist = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}'. Use 'true' or 'false'"))
                })?;
            }
            "format" => {
                self.format = OutputFormat::from_str(value, true).map_err(|_| {
                    ConfigError::Message(format!("Invalid value for format: '{value}'. Use 'text' or 'json'"))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WatchrollConfig::default();
        assert!(config.watchlist.is_none());
        assert!(!config.quiet);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_watchlist_path_precedence() {
        let mut config = WatchrollConfig::default();
        assert_eq!(config.watchlist_path(None), PathBuf::from(DEFAULT_WATCHLIST));

        config.watchlist = Some(PathBuf::from("/srv/list.csv"));
        assert_eq!(config.watchlist_path(None), PathBuf::from("/srv/list.csv"));

        let cli = PathBuf::from("mine.csv");
        assert_eq!(config.watchlist_path(Some(&cli)), cli);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = WatchrollConfig {
            watchlist: Some(PathBuf::from("/tmp/watchlist.csv")),
            quiet: true,
            format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();

        let loaded = WatchrollConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = WatchrollConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.watchlist.is_none());
    }

    #[test]
    fn test_no_config_directory_uses_defaults() {
        let loaded = WatchrollConfig::load_sources(None).unwrap();
        assert_eq!(loaded.watchlist_path(Some(Path::new("list.csv"))), PathBuf::from("list.csv"));
        assert_eq!(loaded.format, OutputFormat::Text);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = WatchrollConfig::default();

        config.set("quiet", "true").unwrap();
        assert_eq!(config.get("quiet").unwrap(), "true");

        config.set("format", "JSON").unwrap();
        assert_eq!(config.get("format").unwrap(), "json");

        config.set("watchlist", "lists/mine.csv").unwrap();
        assert_eq!(config.get("watchlist").unwrap(), "lists/mine.csv");

        config.set("watchlist", "").unwrap();
        assert!(config.watchlist.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values_and_keys() {
        let mut config = WatchrollConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }
}
