//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::view::NOTIFICATION_MS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the session store is seeded
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Start with the two default anecdotes
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Optional TOML file with extra `[[anecdotes]]` entries
    #[serde(default)]
    pub seed_file: Option<String>,
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
            seed_file: None,
        }
    }
}

/// "Anecdote got added!" notification settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NotificationConfig {
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

fn default_display_ms() -> u64 {
    NOTIFICATION_MS
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "runtime")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("anecdotes").join("config.toml")),
            Some(PathBuf::from("/etc/anecdotes/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Store overrides
        if let Some(path) = var("ANECDOTES_SEED_FILE") {
            self.store.seed_file = Some(path);
        }
        if let Some(flag) = var("ANECDOTES_SEED_DEFAULTS") {
            if let Ok(b) = flag.parse() {
                self.store.seed_defaults = b;
            }
        }

        // Notification overrides
        if let Some(ms) = var("ANECDOTES_NOTIFICATION_MS") {
            if let Ok(ms) = ms.parse() {
                self.notification.display_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = var("ANECDOTES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("ANECDOTES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Anecdotes Configuration
#
# Environment variables override these settings:
# - ANECDOTES_SEED_FILE
# - ANECDOTES_SEED_DEFAULTS
# - ANECDOTES_NOTIFICATION_MS
# - ANECDOTES_LOG_LEVEL
# - ANECDOTES_LOG_FORMAT

[store]
# Start every session with the two built-in anecdotes
seed_defaults = true

# Extra anecdotes to load at startup ([[anecdotes]] tables with
# content, author, info and optional votes)
# seed_file = "./anecdotes.toml"

[notification]
# How long "Anecdote got added!" stays visible (ms)
display_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/anecdotes/anecdotes.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.store.seed_defaults);
        assert!(config.store.seed_file.is_none());
        assert_eq!(config.notification.display_ms, 5000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config(), Path::new("default.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            "[notification]\ndisplay_ms = 250\n",
            Path::new("partial.toml"),
        )
        .unwrap();

        assert_eq!(config.notification.display_ms, 250);
        assert_eq!(
            config.notification.display_duration(),
            std::time::Duration::from_millis(250)
        );
        assert!(config.store.seed_defaults);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nseed_defaults = false\nseed_file = \"extra.toml\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.store.seed_defaults);
        assert_eq!(config.store.seed_file.as_deref(), Some("extra.toml"));
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let err = Config::parse("[store\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ANECDOTES_SEED_FILE", "seed.toml"),
            ("ANECDOTES_SEED_DEFAULTS", "false"),
            ("ANECDOTES_NOTIFICATION_MS", "1200"),
            ("ANECDOTES_LOG_LEVEL", "debug"),
            ("ANECDOTES_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.seed_file.as_deref(), Some("seed.toml"));
        assert!(!config.store.seed_defaults);
        assert_eq!(config.notification.display_ms, 1200);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unparseable_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "ANECDOTES_NOTIFICATION_MS" => Some("soon".to_string()),
            "ANECDOTES_SEED_DEFAULTS" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
    }
}
