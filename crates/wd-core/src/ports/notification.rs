use serde::{Deserialize, Serialize};

/// One transient message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    /// Unix timestamp in milliseconds, taken from [`ClockPort`](super::ClockPort).
    pub emitted_at_ms: i64,
}

/// Fire-and-forget notification sink.
///
/// Implementations must never block and never fail the caller; a sink that
/// cannot display a notification drops it.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
