//! Core data types for the anecdote store
//!
//! - `Anecdote`: a stored, identified record with its vote count
//! - `NewAnecdote`: the draft submitted by the creation form
//! - `Snapshot`: an immutable view of the whole collection

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier assigned to an anecdote when it enters the store
pub type AnecdoteId = u64;

/// Immutable, cheaply clonable view of the collection at one point in time.
///
/// Every mutation installs a new snapshot, so two snapshots taken around a
/// no-op compare equal with `Arc::ptr_eq`.
pub type Snapshot = Arc<[Anecdote]>;

/// A stored anecdote
///
/// Two records are the same entity iff their ids match. Records are never
/// edited in place; the store replaces them with updated copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Anecdote {
    /// Unique identifier within the store
    pub id: AnecdoteId,
    /// The quote or story itself
    pub content: String,
    /// Who said or wrote it
    pub author: String,
    /// URL with more information
    pub info: String,
    /// Number of votes received
    #[serde(default)]
    pub votes: u32,
}

impl Anecdote {
    /// Build a fresh record from a draft with zero votes
    pub fn from_draft(id: AnecdoteId, draft: NewAnecdote) -> Self {
        Self {
            id,
            content: draft.content,
            author: draft.author,
            info: draft.info,
            votes: 0,
        }
    }

    /// Copy of this record with one more vote
    pub fn voted(&self) -> Self {
        Self {
            votes: self.votes.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Draft of an anecdote that has not been assigned an id yet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl NewAnecdote {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            info: info.into(),
        }
    }
}
