//! # Anecdotes
//!
//! A small routed application for collecting and voting on software
//! anecdotes. State lives in memory for one session only.
//!
//! ## Modules
//!
//! - [`store`]: The anecdote collection, id allocation, and seeding
//! - [`field`]: Controlled form inputs (field bindings)
//! - [`routes`]: Path to view mapping and the navigation menu
//! - [`view`]: Detail lookup results and one-shot flash messages
//! - [`config`]: TOML + environment configuration
//!
//! With the `runtime` feature (on by default):
//!
//! - [`notice`]: Self-hiding notification with a cancellable timer
//! - [`session`]: The state container a presentation layer drives
//! - [`shell`]: Terminal presentation layer
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anecdotes::{Config, Route, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::from_config(&Config::default())?;
//!
//!     session.navigate(Route::CreateNew);
//!     if let Some(form) = session.form_mut() {
//!         form.content.on_change("Walking on water and developing software from a specification are easy if both are frozen");
//!         form.author.on_change("Edward V. Berard");
//!         form.info.on_change("https://en.wikiquote.org/wiki/Edward_V._Berard");
//!     }
//!     let added = session.submit().expect("create view is showing");
//!
//!     session.vote(added.id);
//!     println!("{:?}", session.notification());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod field;
pub mod routes;
pub mod store;
pub mod view;

#[cfg(feature = "runtime")]
pub mod logging;
#[cfg(feature = "runtime")]
pub mod notice;
#[cfg(feature = "runtime")]
pub mod session;
#[cfg(feature = "runtime")]
pub mod shell;

// Re-export top-level types for convenience
pub use store::{
    Anecdote, AnecdoteId, AnecdoteStore, IdAllocator, NewAnecdote, Snapshot, StoreError,
    StoreResult,
};

pub use field::{DraftForm, Field, InputAttrs, InputKind};

pub use routes::{MenuEntry, Route, MENU};

pub use view::{Detail, Flash, FlashSlot, ADDED_MESSAGE};

pub use config::{Config, ConfigError, LoggingConfig, NotificationConfig, StoreConfig};

#[cfg(feature = "runtime")]
pub use notice::Notice;

#[cfg(feature = "runtime")]
pub use session::Session;
