//! Reactive app state: wallet session and notification queue contexts.

pub mod notifications;
pub mod wallet;
