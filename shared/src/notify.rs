//! Notification queue with FIFO auto-expiry semantics.
//!
//! Any flow step may push a message; the frontend schedules one head
//! eviction per push, [`NOTIFICATION_TTL_MS`] later. Expiry is paired with
//! push count, not with the pushed item itself: each scheduled eviction
//! removes whatever is at the head when it fires. Queue length stays
//! bounded in steady state only while push rate <= eviction rate.

use serde::{Deserialize, Serialize};

/// How long a pushed notification keeps its eviction slot, in milliseconds.
pub const NOTIFICATION_TTL_MS: u32 = 3500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

/// One ephemeral user-facing message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub visible: bool,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            visible: true,
            severity,
        }
    }
}

/// Ordered queue of notifications. Multiple entries may be visible at
/// once; there is no dedup.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification at the tail. The caller is responsible for
    /// scheduling exactly one [`expire_head`](Self::expire_head) per push.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.items.push(Notification::new(message, severity));
    }

    /// Remove and return the head, regardless of which push it belonged to.
    pub fn expire_head(&mut self) -> Option<Notification> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Seam between flows that emit notifications (wallet diffing, the swap
/// sequencer) and whatever holds the reactive queue. The frontend
/// implements this over a signal; tests implement it over a `RefCell`.
pub trait NotifySink {
    fn notify(&self, message: &str, severity: Severity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_at_tail() {
        let mut queue = NotificationQueue::new();
        queue.push("first", Severity::Info);
        queue.push("second", Severity::Success);

        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(queue.iter().all(|n| n.visible));
    }

    #[test]
    fn eviction_removes_from_head_not_from_own_push() {
        let mut queue = NotificationQueue::new();
        queue.push("a", Severity::Info);
        queue.push("b", Severity::Info);
        queue.push("c", Severity::Info);

        // the eviction scheduled by pushing "c" still removes "a"
        assert_eq!(queue.expire_head().map(|n| n.message), Some("a".into()));
        assert_eq!(queue.expire_head().map(|n| n.message), Some("b".into()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn n_pushes_drain_with_n_evictions() {
        let mut queue = NotificationQueue::new();
        for i in 0..5 {
            queue.push(format!("msg {i}"), Severity::Warning);
        }
        for _ in 0..5 {
            assert!(queue.expire_head().is_some());
        }
        assert!(queue.is_empty());
        assert!(queue.expire_head().is_none());
    }

    #[test]
    fn duplicate_messages_are_kept() {
        let mut queue = NotificationQueue::new();
        queue.push("same", Severity::Error);
        queue.push("same", Severity::Error);
        assert_eq!(queue.len(), 2);
    }
}
