//! View states shared by every presentation layer
//!
//! - `Detail`: outcome of opening `/:id`
//! - `Flash`: one-shot message carried along a navigation
//! - `FlashSlot`: holds a pending flash until the destination view takes it

use crate::store::{Anecdote, AnecdoteId, AnecdoteStore};

/// Text shown on the list view after a successful submission
pub const ADDED_MESSAGE: &str = "Anecdote got added!";

/// Default time the "added" notification stays visible
pub const NOTIFICATION_MS: u64 = 5000;

/// What the detail view should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Found(Anecdote),
    NotFound(AnecdoteId),
}

impl Detail {
    pub fn lookup(store: &AnecdoteStore, id: AnecdoteId) -> Self {
        match store.find_by_id(id) {
            Some(anecdote) => Detail::Found(anecdote.clone()),
            None => Detail::NotFound(id),
        }
    }

    pub fn anecdote(&self) -> Option<&Anecdote> {
        match self {
            Detail::Found(anecdote) => Some(anecdote),
            Detail::NotFound(_) => None,
        }
    }

    /// Heading line for the view
    pub fn title(&self) -> String {
        match self {
            Detail::Found(a) => format!("{} by {}", a.content, a.author),
            Detail::NotFound(id) => format!("No anecdote with id {}", id),
        }
    }
}

/// One-shot signal attached to a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    /// The create form just added this anecdote
    Created { id: AnecdoteId },
}

impl Flash {
    pub fn message(&self) -> &'static str {
        match self {
            Flash::Created { .. } => ADDED_MESSAGE,
        }
    }
}

/// Pending flash for the next view; reading it consumes it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashSlot(Option<Flash>);

impl FlashSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was pending
    pub fn set(&mut self, flash: Flash) {
        self.0 = Some(flash);
    }

    /// Take the pending flash, leaving the slot empty
    pub fn take(&mut self) -> Option<Flash> {
        self.0.take()
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lookup() {
        let store = AnecdoteStore::seeded();

        match Detail::lookup(&store, 2) {
            Detail::Found(a) => assert_eq!(a.author, "Donald Knuth"),
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(Detail::lookup(&store, 99), Detail::NotFound(99));
    }

    #[test]
    fn test_detail_title() {
        let store = AnecdoteStore::seeded();
        assert_eq!(
            Detail::lookup(&store, 1).title(),
            "If it hurts, do it more often by Jez Humble"
        );
        assert_eq!(Detail::NotFound(5).title(), "No anecdote with id 5");
        assert!(Detail::NotFound(5).anecdote().is_none());
    }

    #[test]
    fn test_flash_is_read_once() {
        let mut slot = FlashSlot::new();
        slot.set(Flash::Created { id: 3 });
        assert!(slot.is_pending());

        assert_eq!(slot.take(), Some(Flash::Created { id: 3 }));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_flash_message() {
        assert_eq!(Flash::Created { id: 1 }.message(), "Anecdote got added!");
    }
}
