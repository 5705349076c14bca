//! Session State
//!
//! The single state container a presentation layer drives. It owns the
//! anecdote store, the current route, the creation form and the list view's
//! notification, and ties their lifetimes to navigation:
//!
//! - leaving the create view discards the form's contents
//! - leaving the list view cancels its notification timer
//! - a flash handed to `navigate_with` is delivered to the destination view
//!   only, and read once

use std::time::Duration;

use tokio::sync::watch;

use crate::config::{Config, NotificationConfig};
use crate::field::DraftForm;
use crate::notice::Notice;
use crate::routes::Route;
use crate::store::{Anecdote, AnecdoteId, AnecdoteStore, StoreResult};
use crate::view::{Detail, Flash, FlashSlot};

/// State of one running application session
#[derive(Debug)]
pub struct Session {
    store: AnecdoteStore,
    route: Route,
    flash: FlashSlot,
    form: DraftForm,
    notice: Option<Notice>,
    notice_delay: Duration,
}

impl Session {
    /// Start a session on the list view
    pub fn new(store: AnecdoteStore, notification: &NotificationConfig) -> Self {
        tracing::info!("Session started with {} anecdotes", store.len());
        Self {
            store,
            route: Route::AnecdoteList,
            flash: FlashSlot::new(),
            form: DraftForm::new(),
            notice: None,
            notice_delay: notification.display_duration(),
        }
    }

    /// Start a session with the store and notification settings from `config`
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let store = AnecdoteStore::from_config(&config.store)?;
        Ok(Self::new(store, &config.notification))
    }

    pub fn store(&self) -> &AnecdoteStore {
        &self.store
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn notice_delay(&self) -> Duration {
        self.notice_delay
    }

    /// Switch views
    pub fn navigate(&mut self, route: Route) {
        self.navigate_with(route, None);
    }

    /// Switch views, handing `flash` to the destination
    ///
    /// Must be called from within a tokio runtime when the destination may
    /// show a notification.
    pub fn navigate_with(&mut self, route: Route, flash: Option<Flash>) {
        self.unmount();

        tracing::debug!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        if let Some(flash) = flash {
            self.flash.set(flash);
        }

        self.mount();

        if self.flash.take().is_some() {
            tracing::debug!("Flash not consumed by {}", self.route);
        }
    }

    /// The creation form, while the create view is showing
    pub fn form(&self) -> Option<&DraftForm> {
        matches!(self.route, Route::CreateNew).then_some(&self.form)
    }

    pub fn form_mut(&mut self) -> Option<&mut DraftForm> {
        matches!(self.route, Route::CreateNew).then_some(&mut self.form)
    }

    /// Submit the creation form
    ///
    /// Adds the draft, then moves to the list view with a "created" flash.
    /// Returns `None` when the create view is not showing.
    pub fn submit(&mut self) -> Option<Anecdote> {
        if !matches!(self.route, Route::CreateNew) {
            return None;
        }

        let added = self.store.add(self.form.draft());
        self.navigate_with(Route::AnecdoteList, Some(Flash::Created { id: added.id }));
        Some(added)
    }

    /// Per-row vote action
    pub fn vote(&mut self, id: AnecdoteId) -> Option<Anecdote> {
        self.store.vote(id).cloned()
    }

    /// Detail state when the current route is `/:id`
    pub fn detail(&self) -> Option<Detail> {
        match self.route {
            Route::Anecdote(id) => Some(Detail::lookup(&self.store, id)),
            _ => None,
        }
    }

    /// Notification text while it is visible
    pub fn notification(&self) -> Option<&str> {
        self.notice.as_ref().and_then(Notice::visible_message)
    }

    /// Wait for the current notification to hide; returns at once if none
    pub async fn notification_expired(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.expired().await;
        }
    }

    /// Visibility flag of the notification while it is showing
    pub fn notification_watch(&self) -> Option<watch::Receiver<bool>> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible())
            .map(Notice::subscribe)
    }

    fn mount(&mut self) {
        if matches!(self.route, Route::AnecdoteList) {
            if let Some(flash) = self.flash.take() {
                self.notice = Some(Notice::show(flash.message(), self.notice_delay));
            }
        }
    }

    fn unmount(&mut self) {
        // dropping the notice aborts its timer
        self.notice = None;
        if matches!(self.route, Route::CreateNew) {
            self.form.reset();
        }
    }
}
