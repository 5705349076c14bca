//! Seed data
//!
//! The two anecdotes every fresh session starts with, plus loading of extra
//! seed entries from a TOML file:
//!
//! ```toml
//! [[anecdotes]]
//! content = "Adding manpower to a late software project makes it later!"
//! author = "Fred Brooks"
//! info = "https://en.wikipedia.org/wiki/Brooks%27s_law"
//! votes = 3
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::NewAnecdote;

/// One entry of a seed file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
    #[serde(default)]
    pub votes: u32,
}

impl SeedAnecdote {
    pub fn into_draft(self) -> NewAnecdote {
        NewAnecdote {
            content: self.content,
            author: self.author,
            info: self.info,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    anecdotes: Vec<SeedAnecdote>,
}

/// Drafts for the default anecdotes, in display order
pub fn default_drafts() -> Vec<NewAnecdote> {
    vec![
        NewAnecdote::new(
            "If it hurts, do it more often",
            "Jez Humble",
            "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html",
        ),
        NewAnecdote::new(
            "Premature optimization is the root of all evil",
            "Donald Knuth",
            "http://wiki.c2.com/?PrematureOptimization",
        ),
    ]
}

/// Parse seed entries from TOML text
pub fn parse_seed(content: &str, path: &Path) -> StoreResult<Vec<SeedAnecdote>> {
    let file: SeedFile = toml::from_str(content).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(file.anecdotes)
}

/// Read and parse a seed file
pub fn load_seed_file(path: &Path) -> StoreResult<Vec<SeedAnecdote>> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::store::AnecdoteStore;
    use std::io::Write;

    const SEED: &str = r#"
[[anecdotes]]
content = "Adding manpower to a late software project makes it later!"
author = "Fred Brooks"
info = "https://en.wikipedia.org/wiki/Brooks%27s_law"
votes = 3

[[anecdotes]]
content = "Any fool can write code that a computer can understand."
author = "Martin Fowler"
info = "https://martinfowler.com"
"#;

    fn seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_seed() {
        let entries = parse_seed(SEED, Path::new("seed.toml")).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Fred Brooks");
        assert_eq!(entries[0].votes, 3);
        assert_eq!(entries[1].votes, 0);
    }

    #[test]
    fn test_parse_seed_rejects_missing_fields() {
        let err = parse_seed("[[anecdotes]]\ncontent = \"x\"\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_empty_seed_file() {
        assert!(parse_seed("", Path::new("empty.toml")).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_seed_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_store_from_config_appends_seed_file() {
        let file = seed_file(SEED);
        let config = StoreConfig {
            seed_defaults: true,
            seed_file: Some(file.path().to_string_lossy().to_string()),
        };

        let store = AnecdoteStore::from_config(&config).unwrap();
        let list = store.list();

        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(list[2].author, "Fred Brooks");
        assert_eq!(list[2].votes, 3);
        assert_eq!(list[3].votes, 0);
    }

    #[test]
    fn test_store_from_config_without_defaults() {
        let file = seed_file(SEED);
        let config = StoreConfig {
            seed_defaults: false,
            seed_file: Some(file.path().to_string_lossy().to_string()),
        };

        let store = AnecdoteStore::from_config(&config).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(1).unwrap().author, "Fred Brooks");
    }
}
