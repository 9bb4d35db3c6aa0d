//! User-facing notifications
//!
//! The host shows error and info messages to the user. The facade reports
//! through the `Notifier` trait; `TracingNotifier` writes them to the log when
//! no UI is attached.

use parking_lot::Mutex;

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Channel for messages shown to the user
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);
}

/// Notifier that emits log records
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_error(&self, message: &str) {
        tracing::error!(target: "notification", "{}", message);
    }

    fn show_info(&self, message: &str) {
        tracing::info!(target: "notification", "{}", message);
    }
}

/// Notifier that keeps every message, in order
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<(NotificationLevel, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.messages.lock().clone()
    }

    /// Error messages received so far
    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|(level, _)| *level == NotificationLevel::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Notifier for MemoryNotifier {
    fn show_error(&self, message: &str) {
        self.messages
            .lock()
            .push((NotificationLevel::Error, message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.messages
            .lock()
            .push((NotificationLevel::Info, message.to_string()));
    }
}
