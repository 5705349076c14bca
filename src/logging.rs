//! Logging setup
//!
//! Installs a `tracing` subscriber from [`LoggingConfig`]. `RUST_LOG` wins over
//! the configured level. Output goes to stderr (or the configured file) so it
//! never interleaves with the shell's stdout.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("anecdotes={}", config.level.to_lowercase())
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));
    let json = config.format.eq_ignore_ascii_case("json");

    let output: Box<dyn Layer<Registry> + Send + Sync> = match config.file.as_deref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File {
                    path: PathBuf::from(path),
                    source,
                })?;
            let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        None => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_to_crate() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert_eq!(default_filter(&config), "anecdotes=debug");
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = LoggingConfig {
            file: Some("/no/such/dir/anecdotes.log".to_string()),
            ..Default::default()
        };
        assert!(matches!(init(&config), Err(LoggingError::File { .. })));
    }
}
