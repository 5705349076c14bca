//! Anecdote store error types

use std::path::PathBuf;
use thiserror::Error;

use super::types::AnecdoteId;

/// Errors that can occur while building or seeding a store
///
/// Lookups and votes never fail: an unknown id is reported as `None` or
/// treated as a no-op.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two seed records share an id
    #[error("Duplicate anecdote id: {0}")]
    DuplicateId(AnecdoteId),

    /// A seed record uses an id above `MAX_SEED_ID`
    #[error("Anecdote id space exhausted by id {0}")]
    IdSpaceExhausted(AnecdoteId),

    /// Seed file could not be read
    #[error("Failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid TOML or has the wrong shape
    #[error("Failed to parse seed file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateId(2);
        assert_eq!(err.to_string(), "Duplicate anecdote id: 2");

        let err = StoreError::Parse {
            path: PathBuf::from("seed.toml"),
            error: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse seed file \"seed.toml\": expected a table"
        );
    }
}
