//! Notification surfaces.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::domain::notification::{Notification, NotificationId, NotificationStatus, Severity};
use crate::ports::NotificationSurface;

/// What a surface was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Mounted(NotificationId),
    Status(NotificationId, NotificationStatus),
    Detached(NotificationId),
}

/// A notification element as it would appear on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToast {
    pub id: NotificationId,
    pub label: String,
    pub severity: Severity,
    pub classes: Vec<String>,
}

impl RenderedToast {
    fn new(notification: &Notification) -> Self {
        let mut toast = Self {
            id: notification.id,
            label: notification.label(),
            severity: notification.severity,
            classes: Vec::new(),
        };
        toast.apply(NotificationStatus::Created);
        toast
    }

    fn apply(&mut self, status: NotificationStatus) {
        self.classes = self
            .severity
            .style()
            .classes
            .iter()
            .chain(status.transition_classes())
            .map(|c| c.to_string())
            .collect();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Default)]
struct Recorded {
    events: Vec<SurfaceEvent>,
    mounted: Vec<RenderedToast>,
}

/// Surface that keeps the rendered stack in memory.
#[derive(Default)]
pub struct RecordingSurface {
    recorded: Mutex<Recorded>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every call received, in order.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.recorded().events.clone()
    }

    /// Elements currently attached, top to bottom.
    pub fn mounted(&self) -> Vec<RenderedToast> {
        self.recorded().mounted.clone()
    }

    pub fn rendered(&self, id: NotificationId) -> Option<RenderedToast> {
        self.recorded().mounted.iter().find(|t| t.id == id).cloned()
    }

    pub fn is_mounted(&self, id: NotificationId) -> bool {
        self.rendered(id).is_some()
    }
}

impl NotificationSurface for RecordingSurface {
    fn mount(&self, notification: &Notification) {
        let mut recorded = self.recorded();
        recorded.events.push(SurfaceEvent::Mounted(notification.id));
        recorded.mounted.push(RenderedToast::new(notification));
    }

    fn apply_status(&self, id: NotificationId, status: NotificationStatus) {
        let mut recorded = self.recorded();
        recorded.events.push(SurfaceEvent::Status(id, status));
        if let Some(toast) = recorded.mounted.iter_mut().find(|t| t.id == id) {
            toast.apply(status);
        }
    }

    fn detach(&self, id: NotificationId) {
        let mut recorded = self.recorded();
        recorded.events.push(SurfaceEvent::Detached(id));
        recorded.mounted.retain(|t| t.id != id);
    }
}

/// Surface that prints each notification to stderr once, when mounted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSurface for ConsoleSurface {
    fn mount(&self, notification: &Notification) {
        eprintln!("{}", notification.label());
    }

    fn apply_status(&self, id: NotificationId, status: NotificationStatus) {
        debug!(notification_id = %id, %status, "Notification status changed");
    }

    fn detach(&self, id: NotificationId) {
        debug!(notification_id = %id, "Notification detached");
    }
}
