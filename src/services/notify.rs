//! Toast notifications.
//!
//! One slot: a new notification replaces whatever is showing. The host
//! polls with the current instant and hides the toast once its TTL has run
//! out.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::{Duration, Instant};

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notification>,
    ttl: Duration,
}

impl Notifier {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show `message` now.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let message = message.into();
        match kind {
            NotificationKind::Error => warn!(%message, "notification"),
            NotificationKind::Success | NotificationKind::Info => info!(%message, ?kind, "notification"),
        }
        self.current = Some(Notification { message, kind, shown_at: now });
    }

    /// The last notification shown, whether or not it has expired.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The notification to display at `now`, if its TTL has not run out.
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.ttl)
    }

    /// Drop the notification if it has expired at `now`. Returns whether
    /// one was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible_at(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
