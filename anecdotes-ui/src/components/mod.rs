//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod field_input;
pub mod nav;
pub mod notification;

pub use field_input::FieldInput;
pub use nav::Menu;
pub use notification::Notification;
