//! State Management
//!
//! Global application state and form field bindings.

pub mod field;
pub mod global;

pub use field::{use_field, FieldAttrs, FieldBinding};
pub use global::{provide_global_state, use_global_state, GlobalState};
