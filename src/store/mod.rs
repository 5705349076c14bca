//! Anecdote Store
//!
//! In-memory collection of anecdotes for one session:
//!
//! - **types**: Core data structures (Anecdote, NewAnecdote, Snapshot)
//! - **collection**: The store itself and its id allocator
//! - **seed**: Default anecdotes and seed-file loading
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use anecdotes::store::{AnecdoteStore, NewAnecdote};
//!
//! let mut store = AnecdoteStore::seeded();
//! let added = store.add(NewAnecdote::new(
//!     "Debugging is twice as hard as writing the code in the first place",
//!     "Brian Kernighan",
//!     "https://en.wikiquote.org/wiki/Brian_Kernighan",
//! ));
//!
//! store.vote(added.id);
//! assert_eq!(store.find_by_id(added.id).map(|a| a.votes), Some(1));
//! assert!(store.find_by_id(12345).is_none());
//! ```

pub mod collection;
pub mod error;
pub mod seed;
pub mod types;

pub use collection::{AnecdoteStore, IdAllocator, MAX_SEED_ID};
pub use error::{StoreError, StoreResult};
pub use seed::{default_drafts, load_seed_file, SeedAnecdote};
pub use types::{Anecdote, AnecdoteId, NewAnecdote, Snapshot};
