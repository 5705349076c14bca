//! Field Binding
//!
//! A controlled form input: the current value plus the two ways it may change
//! (a change notification from the input, or an explicit reset).
//!
//! The attributes that belong on the input element are exposed through
//! [`Field::attrs`]; resetting is a separate method and never part of that set.

use std::fmt;

use crate::store::NewAnecdote;

/// Kind of input element a field renders as (the HTML `type` attribute)
///
/// Kinds are not validated; anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Url,
    Email,
    Number,
    Password,
    Search,
    Other(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            InputKind::Text => "text",
            InputKind::Url => "url",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Password => "password",
            InputKind::Search => "search",
            InputKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for InputKind {
    fn from(kind: &str) -> Self {
        match kind {
            "text" => InputKind::Text,
            "url" => InputKind::Url,
            "email" => InputKind::Email,
            "number" => InputKind::Number,
            "password" => InputKind::Password,
            "search" => InputKind::Search,
            other => InputKind::Other(other.to_string()),
        }
    }
}

impl From<String> for InputKind {
    fn from(kind: String) -> Self {
        InputKind::from(kind.as_str())
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties that can be placed directly on an input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAttrs<'a> {
    /// Value for the `type` attribute
    pub kind: &'a str,
    /// Current content
    pub value: &'a str,
}

/// A controlled input's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    kind: InputKind,
    value: String,
}

impl Field {
    /// Create an empty field of the given kind
    pub fn new(kind: impl Into<InputKind>) -> Self {
        Self {
            kind: kind.into(),
            value: String::new(),
        }
    }

    /// Shorthand for `Field::new(InputKind::Text)`
    pub fn text() -> Self {
        Self::new(InputKind::Text)
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value with what the input now holds
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Back to the empty value
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// The element attributes, without the reset operation
    pub fn attrs(&self) -> InputAttrs<'_> {
        InputAttrs {
            kind: self.kind.as_str(),
            value: &self.value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Names of the creation form's fields, in display order
pub const DRAFT_FIELDS: [&str; 3] = ["content", "author", "info"];

/// The three text fields of the "create new" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub content: Field,
    pub author: Field,
    pub info: Field,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            content: Field::text(),
            author: Field::text(),
            info: Field::text(),
        }
    }
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a field up by name (`content`, `author` or `info`)
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        match name {
            "content" => Some(&mut self.content),
            "author" => Some(&mut self.author),
            "info" => Some(&mut self.info),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        match name {
            "content" => Some(&self.content),
            "author" => Some(&self.author),
            "info" => Some(&self.info),
            _ => None,
        }
    }

    /// Current values as a draft; empty fields are submitted as-is
    pub fn draft(&self) -> NewAnecdote {
        NewAnecdote::new(self.content.value(), self.author.value(), self.info.value())
    }

    /// Reset every field
    pub fn reset(&mut self) {
        self.content.reset();
        self.author.reset();
        self.info.reset();
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_blank() && self.author.is_blank() && self.info.is_blank()
    }
}
