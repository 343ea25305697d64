//! Notification queue context.
//!
//! `push` appends at the tail and schedules exactly one head eviction
//! 3500 ms later, whatever else gets pushed in between. The pairing is
//! between push count and eviction count, not per-notification TTL; see
//! `shared::notify` for the queue semantics.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use shared::notify::{Notification, NotificationQueue, NotifySink, Severity, NOTIFICATION_TTL_MS};

/// Global notification context.
#[derive(Clone, Copy)]
pub struct NotificationContext {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Append a notification and schedule its paired head eviction.
    pub fn push(&self, message: &str, severity: Severity) {
        self.queue.update(|q| {
            q.push(message, severity);
        });

        let queue = self.queue;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            // the signal may be gone if the app unmounted while waiting
            let _ = queue.try_update(|q| q.expire_head());
        });
    }

    /// Snapshot of the visible notifications, head first.
    pub fn current(&self) -> Vec<Notification> {
        self.queue.with(|q| q.iter().cloned().collect())
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifySink for NotificationContext {
    fn notify(&self, message: &str, severity: Severity) {
        self.push(message, severity);
    }
}

pub fn provide_notification_context() -> NotificationContext {
    let context = NotificationContext::new();
    provide_context(context);
    context
}

pub fn use_notification_context() -> NotificationContext {
    expect_context::<NotificationContext>()
}
