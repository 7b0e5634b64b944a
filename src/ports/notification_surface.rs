//! Notification Surface Port - the on-screen stack toasts render into.
//!
//! In a browser this is a container anchored top-right; elsewhere it may be a
//! terminal or an in-memory recorder.

use crate::domain::notification::{Notification, NotificationId, NotificationStatus};

/// Renders notifications.
///
/// Calls for one notification always arrive in lifecycle order:
/// `mount`, zero or more `apply_status`, then `detach`. Calls are made with
/// the queue locked, so an implementation must not call back into the queue
/// from the same thread.
pub trait NotificationSurface: Send + Sync {
    /// Appends an element for `notification` with its entrance classes.
    fn mount(&self, notification: &Notification);

    /// Applies the transition classes for `status`.
    fn apply_status(&self, id: NotificationId, status: NotificationStatus);

    /// Removes the element.
    fn detach(&self, id: NotificationId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_surface_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn NotificationSurface) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn NotificationSurface>>();
    }
}
