//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod anecdote_detail;
pub mod anecdote_list;
pub mod create_new;

pub use about::About;
pub use anecdote_detail::AnecdoteDetail;
pub use anecdote_list::AnecdoteList;
pub use create_new::CreateNew;
