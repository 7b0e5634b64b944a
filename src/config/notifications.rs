//! Notification timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::NotificationTimings;

/// Toast timings, in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// How long a toast stays before dismissing itself
    #[serde(default = "default_ttl_ms")]
    pub default_ttl_ms: u64,

    /// Exit transition length before the element is detached
    #[serde(default = "default_dismiss_transition_ms")]
    pub dismiss_transition_ms: u64,

    /// Length of one animation frame
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl NotificationsConfig {
    pub fn timings(&self) -> NotificationTimings {
        NotificationTimings {
            default_ttl: Duration::from_millis(self.default_ttl_ms),
            dismiss_transition: Duration::from_millis(self.dismiss_transition_ms),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_ttl_ms == 0 {
            return Err(ValidationError::InvalidTiming("notifications.default_ttl_ms"));
        }
        if self.frame_interval_ms == 0 {
            return Err(ValidationError::InvalidTiming("notifications.frame_interval_ms"));
        }
        Ok(())
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: default_ttl_ms(),
            dismiss_transition_ms: default_dismiss_transition_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    5000
}

fn default_dismiss_transition_ms() -> u64 {
    300
}

fn default_frame_interval_ms() -> u64 {
    16
}
