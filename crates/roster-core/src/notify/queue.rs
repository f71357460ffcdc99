use std::collections::HashMap;
use std::future::poll_fn;
use std::time::Duration;

use futures::FutureExt;
use tokio_util::time::{DelayQueue, delay_queue};
use tracing::debug;

use super::types::{Toast, ToastId, ToastKind};

/// Ordered, self-expiring list of toasts.
///
/// Each toast gets a `DelayQueue` entry keyed by its id. Expiry and manual
/// dismissal both go through the same removal path, and dismissal cancels
/// the pending entry, so a toast is removed at most once.
///
/// Must be used from within a tokio runtime (entries are backed by tokio timers).
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    timers: DelayQueue<ToastId>,
    keys: HashMap<ToastId, delay_queue::Key>,
    ttl: Duration,
    last_id: u64,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            timers: DelayQueue::new(),
            keys: HashMap::new(),
            ttl,
            last_id: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Append a toast and schedule its expiry. Returns the new id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.next_id();
        let message = message.into();

        debug!(
            event = "core.notify.toast_added",
            id = id.get(),
            kind = %kind,
            message = %message
        );

        let key = self.timers.insert(id, self.ttl);
        self.keys.insert(id, key);
        self.toasts.push(Toast { id, message, kind });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Error)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Warning)
    }

    /// Remove a toast and cancel its expiry.
    ///
    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(key) = self.keys.remove(&id) {
            self.timers.remove(&key);
        }

        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        let removed = self.toasts.len() != before;

        if removed {
            debug!(event = "core.notify.toast_dismissed", id = id.get());
        }
        removed
    }

    /// Wait for the next toast to expire, remove it, and return its id.
    ///
    /// Never resolves while no expiry is pending.
    pub async fn next_expired(&mut self) -> ToastId {
        if self.timers.is_empty() {
            return std::future::pending().await;
        }

        match poll_fn(|cx| self.timers.poll_expired(cx)).await {
            Some(expired) => {
                let id = expired.into_inner();
                self.keys.remove(&id);
                self.toasts.retain(|t| t.id != id);
                debug!(event = "core.notify.toast_expired", id = id.get());
                id
            }
            None => std::future::pending().await,
        }
    }

    /// Remove every toast whose deadline has already passed, without waiting.
    pub fn reap_expired(&mut self) -> Vec<ToastId> {
        let mut expired = Vec::new();
        while let Some(id) = self.next_expired().now_or_never() {
            expired.push(id);
        }
        expired
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Millisecond timestamp, bumped past the previous id on collision.
    fn next_id(&mut self) -> ToastId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        ToastId::new(id)
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("toasts", &self.toasts)
            .field("pending_expiries", &self.keys.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
