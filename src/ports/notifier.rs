//! Notifier Port - raising user-visible notifications.
//!
//! The gateway and client depend on this narrow capability rather than on the
//! full notification queue.

use std::time::Duration;

use crate::domain::notification::{NotificationId, Severity};

/// Raises notifications.
pub trait Notifier: Send + Sync {
    /// Queues a notification. `ttl = None` uses the queue's default.
    fn notify(&self, message: &str, severity: Severity, ttl: Option<Duration>) -> NotificationId;

    /// Queues an error notification with the default TTL.
    fn error(&self, message: &str) -> NotificationId {
        self.notify(message, Severity::Error, None)
    }

    /// Queues a success notification with the default TTL.
    fn success(&self, message: &str) -> NotificationId {
        self.notify(message, Severity::Success, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collecting(Mutex<Vec<(String, Severity)>>);

    impl Notifier for Collecting {
        fn notify(&self, message: &str, severity: Severity, _ttl: Option<Duration>) -> NotificationId {
            self.0.lock().unwrap().push((message.to_string(), severity));
            NotificationId::new()
        }
    }

    #[test]
    fn helpers_pick_severity() {
        let notifier = Collecting::default();
        notifier.error("boom");
        notifier.success("yay");

        let seen = notifier.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                ("boom".to_string(), Severity::Error),
                ("yay".to_string(), Severity::Success)
            ]
        );
    }
}
