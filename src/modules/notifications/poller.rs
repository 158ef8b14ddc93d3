//! Polling client for the notifications endpoint.
//!
//! The browser frontend polls `/api/notifications` on a timer and keeps a
//! local read cursor; this is the same loop for native consumers (the CLI
//! `watch-notifications` command drives it against the database directly).

use std::time::Duration;

use tracing::debug;

/// Local view of a user's notification list.
///
/// The read cursor lives only in this process: restarting the consumer
/// resets it and every notification counts as unread again. Moving the
/// cursor server-side (per-user read receipts) would make it durable;
/// until then this mirrors how the web frontend behaves.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    items: Vec<String>,
    seen: usize,
}

impl NotificationFeed {
    /// Replaces the item list. Returns whether anything changed. The read
    /// cursor is left where it was, so new entries show up as unread.
    pub fn apply(&mut self, items: Vec<String>) -> bool {
        if self.items == items {
            return false;
        }
        self.items = items;
        true
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Count of items past the read cursor. If the server-side list shrank
    /// (an admin rewrote it), this undercounts until the cursor is moved.
    pub fn unread(&self) -> usize {
        self.items.len().saturating_sub(self.seen)
    }

    /// Moves the read cursor to the end of the list.
    pub fn mark_opened(&mut self) {
        self.seen = self.items.len();
    }
}

/// Periodically fetches the notification list and folds it into a
/// [`NotificationFeed`].
pub struct NotificationPoller<F> {
    fetch: F,
    feed: NotificationFeed,
    period: Duration,
}

impl<F, Fut, E> NotificationPoller<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<String>, E>>,
    E: std::fmt::Display,
{
    pub fn new(fetch: F, period: Duration) -> Self {
        Self {
            fetch,
            feed: NotificationFeed::default(),
            period,
        }
    }

    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut NotificationFeed {
        &mut self.feed
    }

    /// One fetch round. A failed fetch keeps the previous view and reports
    /// no change.
    pub async fn poll_once(&mut self) -> bool {
        match (self.fetch)().await {
            Ok(items) => self.feed.apply(items),
            Err(err) => {
                debug!("notification poll failed: {}", err);
                false
            }
        }
    }

    /// Polls forever, invoking `on_update` whenever the list changed. The
    /// first round runs immediately.
    pub async fn run(mut self, mut on_update: impl FnMut(&NotificationFeed)) {
        let mut interval = tokio::time::interval(self.period);
        loop {
            interval.tick().await;
            if self.poll_once().await {
                on_update(&self.feed);
            }
        }
    }
}
