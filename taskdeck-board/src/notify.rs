//! Notification sink - user-facing success/error messages
//!
//! The core emits exactly one notification per mutation outcome. How the
//! host surfaces them (toasts, status bar, logs) is not its concern.

use std::sync::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Create a success notification
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create an error notification. The title is always "Error"; the body
    /// carries the failure message.
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".into(),
            body: body.into(),
        }
    }
}

/// Sink for user-facing notifications. Fire-and-forget: delivery must not
/// fail or block the mutation path.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that forwards to `tracing` - the default for headless hosts
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => {
                tracing::info!(title = %notification.title, "{}", notification.body)
            }
            Severity::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.body)
            }
        }
    }
}

/// Notifier that buffers notifications in memory for the host to drain,
/// the way a toast queue would
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all buffered notifications, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().expect("notifier lock poisoned"))
    }

    /// Snapshot of the buffered notifications without draining
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .expect("notifier lock poisoned")
            .push(notification);
    }
}
