//! Global Application State
//!
//! Reactive state management using Leptos signals. The anecdote store lives
//! here for the whole page session; pages reach it through context.

use anecdotes::store::{Anecdote, AnecdoteId, AnecdoteStore, NewAnecdote, Snapshot};
use anecdotes::view::{Detail, Flash, FlashSlot};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The session's anecdotes
    pub store: RwSignal<AnecdoteStore>,
    /// Flash handed from one view to the next
    pub flash: RwSignal<FlashSlot>,
}

impl GlobalState {
    pub fn new(store: AnecdoteStore) -> Self {
        Self {
            store: create_rw_signal(store),
            flash: create_rw_signal(FlashSlot::new()),
        }
    }

    /// Current collection (tracked)
    pub fn anecdotes(&self) -> Snapshot {
        self.store.with(|s| s.list())
    }

    /// Detail state for `id` (tracked)
    pub fn detail(&self, id: AnecdoteId) -> Detail {
        self.store.with(|s| Detail::lookup(s, id))
    }

    /// Add a draft; `None` only if the state has been disposed
    pub fn add(&self, draft: NewAnecdote) -> Option<Anecdote> {
        self.store.try_update(|s| s.add(draft))
    }

    /// Vote for an anecdote; unknown ids are ignored
    pub fn vote(&self, id: AnecdoteId) {
        self.store.update(|s| {
            s.vote(id);
        });
    }

    /// Leave a flash for the next view
    pub fn set_flash(&self, flash: Flash) {
        self.flash.update_untracked(|slot| slot.set(flash));
    }

    /// Take the pending flash, if any
    pub fn take_flash(&self) -> Option<Flash> {
        let mut taken = None;
        self.flash.update_untracked(|slot| taken = slot.take());
        taken
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(AnecdoteStore::seeded()));
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
