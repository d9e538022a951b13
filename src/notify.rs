//! Notification channel.
//!
//! A fire-and-forget sink for human-readable events ("Galaxy S23 added to
//! cart"). Cart and catalog handlers push into it; presentation layers
//! subscribe and auto-dismiss after [`DISPLAY_DURATION`]. Nothing here
//! affects cart correctness, and publishing with no subscribers is fine.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// How long a notification stays visible before auto-dismiss.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    /// How long subscribers should display this before auto-dismissing,
    /// in milliseconds. Expiry is the subscriber's job.
    #[serde(rename = "displayMs")]
    pub display_ms: u64,
}

#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publishes a notification. Send failure only means nobody is
    /// listening, which is not an error for this channel.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let _ = self.tx.send(Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            display_ms: DISPLAY_DURATION.as_millis() as u64,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}
