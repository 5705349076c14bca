//! Anecdote Store
//!
//! Owns the authoritative collection for a session:
//! - `list()` / `find_by_id()` read the current snapshot
//! - `add()` appends a record with a freshly allocated id
//! - `vote()` swaps a record for a copy with one more vote
//!
//! Mutations never touch an existing snapshot. They build the next one and
//! install it, so holders of an older snapshot keep seeing the old values.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::store::error::{StoreError, StoreResult};
use crate::store::seed;
use crate::store::types::{Anecdote, AnecdoteId, NewAnecdote, Snapshot};

/// Largest id a caller-supplied record may carry
///
/// Everything above is left to the allocator, so a store built from records
/// still has 2^63 ids to hand out.
pub const MAX_SEED_ID: AnecdoteId = AnecdoteId::MAX / 2;

/// Hands out ids in increasing order, starting above every id it has seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: AnecdoteId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next call to `allocate` will return
    pub fn peek(&self) -> AnecdoteId {
        self.next
    }

    /// Take the next id
    pub fn allocate(&mut self) -> AnecdoteId {
        let id = self.next;
        // next starts at or below MAX_SEED_ID + 1; reaching MAX takes 2^63 adds
        self.next += 1;
        id
    }

    /// Make sure `id` is never handed out
    ///
    /// Ids above [`MAX_SEED_ID`] are rejected.
    pub fn observe(&mut self, id: AnecdoteId) -> StoreResult<()> {
        if id > MAX_SEED_ID {
            return Err(StoreError::IdSpaceExhausted(id));
        }
        if id >= self.next {
            self.next = id + 1;
        }
        Ok(())
    }
}

/// In-memory anecdote collection with deterministic id allocation
///
/// Cloning is cheap (the snapshot is shared) but gives the clone its own
/// allocator; keep a single owner per session so ids stay unique.
#[derive(Debug, Clone)]
pub struct AnecdoteStore {
    anecdotes: Snapshot,
    ids: IdAllocator,
}

impl Default for AnecdoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnecdoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            anecdotes: Arc::from(Vec::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Store holding the two default anecdotes (ids 1 and 2)
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed::default_drafts() {
            store.add(draft);
        }
        store
    }

    /// Build a store from records that already carry ids
    ///
    /// Fails on a repeated id instead of silently keeping both.
    pub fn from_records(records: Vec<Anecdote>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut ids = IdAllocator::new();

        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            ids.observe(record.id)?;
        }

        Ok(Self {
            anecdotes: Arc::from(records),
            ids,
        })
    }

    /// Build the session store described by the configuration
    ///
    /// Default anecdotes come first (when enabled), followed by the seed
    /// file entries in file order.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let mut store = if config.seed_defaults {
            Self::seeded()
        } else {
            Self::new()
        };

        if let Some(path) = &config.seed_file {
            let entries = seed::load_seed_file(Path::new(path))?;
            tracing::info!("Loaded {} seed anecdotes from {}", entries.len(), path);
            for entry in entries {
                let votes = entry.votes;
                let id = store.add(entry.into_draft()).id;
                if votes > 0 {
                    store.replace(id, |a| Anecdote { votes, ..a.clone() });
                }
            }
        }

        Ok(store)
    }

    /// Current collection snapshot
    pub fn list(&self) -> Snapshot {
        Arc::clone(&self.anecdotes)
    }

    /// Borrow the current records without taking a snapshot
    pub fn as_slice(&self) -> &[Anecdote] {
        &self.anecdotes
    }

    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anecdotes.is_empty()
    }

    /// Find an anecdote by exact id
    pub fn find_by_id(&self, id: AnecdoteId) -> Option<&Anecdote> {
        self.anecdotes.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AnecdoteId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Add a draft to the end of the collection and return the stored record
    pub fn add(&mut self, draft: NewAnecdote) -> Anecdote {
        let anecdote = Anecdote::from_draft(self.ids.allocate(), draft);

        let mut next = Vec::with_capacity(self.anecdotes.len() + 1);
        next.extend_from_slice(&self.anecdotes);
        next.push(anecdote.clone());
        self.anecdotes = Arc::from(next);

        tracing::debug!(id = anecdote.id, author = %anecdote.author, "Anecdote added");
        anecdote
    }

    /// Give the anecdote one more vote
    ///
    /// Unknown ids leave the collection (and its snapshot) untouched.
    pub fn vote(&mut self, id: AnecdoteId) -> Option<&Anecdote> {
        if !self.replace(id, Anecdote::voted) {
            tracing::debug!(id, "Vote for unknown anecdote ignored");
            return None;
        }

        let voted = self.find_by_id(id);
        if let Some(anecdote) = voted {
            tracing::debug!(id, votes = anecdote.votes, "Anecdote voted");
        }
        voted
    }

    /// Sum of all votes in the collection
    pub fn total_votes(&self) -> u64 {
        self.anecdotes.iter().map(|a| u64::from(a.votes)).sum()
    }

    /// First anecdote with the highest vote count
    pub fn most_voted(&self) -> Option<&Anecdote> {
        self.anecdotes
            .iter()
            .fold(None, |best: Option<&Anecdote>, a| match best {
                Some(b) if b.votes >= a.votes => Some(b),
                _ => Some(a),
            })
    }

    /// Id the next `add` will assign
    pub fn next_id(&self) -> AnecdoteId {
        self.ids.peek()
    }

    /// Install a new snapshot with the record for `id` replaced by `update(record)`
    fn replace(&mut self, id: AnecdoteId, update: impl Fn(&Anecdote) -> Anecdote) -> bool {
        let Some(position) = self.anecdotes.iter().position(|a| a.id == id) else {
            return false;
        };

        let next: Vec<Anecdote> = self
            .anecdotes
            .iter()
            .enumerate()
            .map(|(i, a)| if i == position { update(a) } else { a.clone() })
            .collect();
        self.anecdotes = Arc::from(next);
        true
    }
}
