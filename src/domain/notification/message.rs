//! The notification value itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use super::Severity;

/// Default display time before automatic dismissal.
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

/// Identifies one notification within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Generates a fresh random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub ttl: Duration,
}

impl Notification {
    /// Creates a notification with a fresh ID.
    pub fn new(message: impl Into<String>, severity: Severity, ttl: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            ttl,
        }
    }

    /// Creates an info notification with the default TTL.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, DEFAULT_TTL)
    }

    /// Text rendered inside the element, icon first.
    pub fn label(&self) -> String {
        format!("{} {}", self.severity.style().icon, self.message)
    }
}
