//! Transient notification
//!
//! A `Notice` is visible from the moment it is shown until its hide timer
//! fires. The timer is a spawned tokio task owned by the notice: dropping the
//! notice (the view unmounting) aborts the task.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A message that hides itself after a delay
#[derive(Debug)]
pub struct Notice {
    message: String,
    visible: watch::Receiver<bool>,
    timer: JoinHandle<()>,
}

impl Notice {
    /// Show `message` now and hide it after `delay`
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(message: impl Into<String>, delay: Duration) -> Self {
        let message = message.into();
        let (tx, visible) = watch::channel(true);

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(false);
            tracing::debug!("Notification hidden after {:?}", delay);
        });

        Self {
            message,
            visible,
            timer,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// Message while visible
    pub fn visible_message(&self) -> Option<&str> {
        self.is_visible().then_some(self.message.as_str())
    }

    /// Watch the visibility flag from elsewhere (e.g. a render loop)
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.clone()
    }

    /// Wait until the notice hides (or its timer is gone)
    pub async fn expired(&mut self) {
        while *self.visible.borrow_and_update() {
            if self.visible.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Drop for Notice {
    fn drop(&mut self) {
        if !self.timer.is_finished() {
            tracing::debug!("Notification timer cancelled");
        }
        self.timer.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_notice_hides_after_delay() {
        let start = Instant::now();
        let mut notice = Notice::show("Anecdote got added!", Duration::from_secs(5));

        assert!(notice.is_visible());
        assert_eq!(notice.visible_message(), Some("Anecdote got added!"));

        notice.expired().await;

        assert!(!notice.is_visible());
        assert!(notice.visible_message().is_none());
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_visible_before_delay() {
        let notice = Notice::show("hello", Duration::from_secs(5));

        tokio::time::sleep(Duration::from_secs(4)).await;

        assert!(notice.is_visible());
        assert_eq!(notice.message(), "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let notice = Notice::show("bye", Duration::from_secs(5));
        let mut rx = notice.subscribe();

        drop(notice);

        // the sender goes away with the aborted task without ever hiding
        assert!(rx.changed().await.is_err());
        assert!(*rx.borrow());
    }
}
