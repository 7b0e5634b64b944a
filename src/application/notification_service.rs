//! NotificationService - the toast queue.
//!
//! Each notification is mounted hidden, revealed on the next animation frame,
//! and dismissed after its TTL (or earlier on request). Dismissal applies the
//! hidden classes again and detaches the element once the exit transition
//! has had time to run.
//!
//! All timing goes through the [`Scheduler`] port. Scheduled tasks hold a
//! weak handle, so dropping every clone of the service cancels pending work.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::foundation::StateMachine;
use crate::domain::notification::{
    Notification, NotificationId, NotificationStatus, Severity, DEFAULT_TTL,
};
use crate::ports::{NotificationSurface, Notifier, Scheduler};

/// Default delay between starting the exit transition and detaching.
pub const DEFAULT_DISMISS_TRANSITION: Duration = Duration::from_millis(300);

/// Timing knobs for the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub default_ttl: Duration,
    pub dismiss_transition: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            dismiss_transition: DEFAULT_DISMISS_TRANSITION,
        }
    }
}

/// A notification that is still mounted, with its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub status: NotificationStatus,
}

struct Inner {
    scheduler: Arc<dyn Scheduler>,
    surface: Arc<dyn NotificationSurface>,
    timings: NotificationTimings,
    entries: Mutex<Vec<ActiveNotification>>,
}

impl Inner {
    fn entries(&self) -> MutexGuard<'_, Vec<ActiveNotification>> {
        // A panic in a surface call never leaves the list half-updated.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Moves `id` to `target` if the edge is valid and mirrors the change on
    /// the surface before releasing the lock. Returns whether it moved.
    fn advance(&self, id: NotificationId, target: NotificationStatus) -> bool {
        let mut entries = self.entries();
        let Some(entry) = entries.iter_mut().find(|e| e.notification.id == id) else {
            return false;
        };
        let Ok(next) = entry.status.transition_to(target) else {
            return false;
        };
        entry.status = next;

        if next == NotificationStatus::Removed {
            entries.retain(|e| e.notification.id != id);
            self.surface.detach(id);
        } else {
            self.surface.apply_status(id, next);
        }
        true
    }

    fn reveal(&self, id: NotificationId) {
        self.advance(id, NotificationStatus::Visible);
    }

    fn remove(&self, id: NotificationId) {
        if self.advance(id, NotificationStatus::Removed) {
            debug!(notification_id = %id, "Notification removed");
        }
    }
}

/// Queue of transient notifications.
///
/// Cloning shares the same queue.
#[derive(Clone)]
pub struct NotificationService {
    inner: Arc<Inner>,
}

impl NotificationService {
    /// Creates a queue with default timings.
    pub fn new(scheduler: Arc<dyn Scheduler>, surface: Arc<dyn NotificationSurface>) -> Self {
        Self::with_timings(scheduler, surface, NotificationTimings::default())
    }

    /// Creates a queue with custom timings.
    pub fn with_timings(
        scheduler: Arc<dyn Scheduler>,
        surface: Arc<dyn NotificationSurface>,
        timings: NotificationTimings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                scheduler,
                surface,
                timings,
                entries: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Timings in effect.
    pub fn timings(&self) -> NotificationTimings {
        self.inner.timings
    }

    /// Shows a notification. `ttl = None` uses the default TTL.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        ttl: Option<Duration>,
    ) -> NotificationId {
        let ttl = ttl.unwrap_or(self.inner.timings.default_ttl);
        let notification = Notification::new(message, severity, ttl);
        let id = notification.id;

        {
            let mut entries = self.inner.entries();
            self.inner.surface.mount(&notification);
            entries.push(ActiveNotification {
                notification,
                status: NotificationStatus::Created,
            });
        }
        debug!(notification_id = %id, %severity, "Notification shown");

        let weak = Arc::downgrade(&self.inner);
        self.inner.scheduler.on_next_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.reveal(id);
            }
        }));

        let weak = Arc::downgrade(&self.inner);
        self.inner.scheduler.after(
            ttl,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    NotificationService { inner }.dismiss(id);
                }
            }),
        );

        id
    }

    /// Starts removal of `id`. Does nothing if it is already on its way out.
    pub fn dismiss(&self, id: NotificationId) {
        if !self.inner.advance(id, NotificationStatus::Dismissing) {
            return;
        }

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        self.inner.scheduler.after(
            self.inner.timings.dismiss_transition,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            }),
        );
    }

    /// Mounted notifications in display order.
    pub fn active(&self) -> Vec<ActiveNotification> {
        self.inner.entries().clone()
    }

    /// Number of mounted notifications.
    pub fn len(&self) -> usize {
        self.inner.entries().len()
    }

    /// True if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current status of `id`; `None` once removed or if never shown.
    pub fn status(&self, id: NotificationId) -> Option<NotificationStatus> {
        self.inner
            .entries()
            .iter()
            .find(|e| e.notification.id == id)
            .map(|e| e.status)
    }
}

impl Notifier for NotificationService {
    fn notify(&self, message: &str, severity: Severity, ttl: Option<Duration>) -> NotificationId {
        if message.is_empty() {
            warn!(%severity, "Showing notification with empty message");
        }
        self.show(message, severity, ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scheduler::ManualScheduler;
    use crate::adapters::ui::{RecordingSurface, SurfaceEvent};

    fn service() -> (NotificationService, Arc<ManualScheduler>, Arc<RecordingSurface>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let surface = Arc::new(RecordingSurface::new());
        let service = NotificationService::new(scheduler.clone(), surface.clone());
        (service, scheduler, surface)
    }

    #[test]
    fn show_mounts_hidden_then_reveals_on_next_frame() {
        let (service, scheduler, surface) = service();

        let id = service.show("Hello", Severity::Info, None);

        assert_eq!(service.status(id), Some(NotificationStatus::Created));
        assert_eq!(surface.events(), vec![SurfaceEvent::Mounted(id)]);

        scheduler.run_frame();

        assert_eq!(service.status(id), Some(NotificationStatus::Visible));
        assert_eq!(
            surface.events(),
            vec![
                SurfaceEvent::Mounted(id),
                SurfaceEvent::Status(id, NotificationStatus::Visible)
            ]
        );
    }

    #[test]
    fn ttl_expiry_dismisses_then_detaches() {
        let (service, scheduler, surface) = service();
        let id = service.show("Saved", Severity::Success, None);
        scheduler.run_frame();

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(service.status(id), Some(NotificationStatus::Visible));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(service.status(id), Some(NotificationStatus::Dismissing));
        assert!(surface.is_mounted(id));

        scheduler.advance(DEFAULT_DISMISS_TRANSITION);
        assert_eq!(service.status(id), None);
        assert!(!surface.is_mounted(id));
        assert!(service.is_empty());
    }

    #[test]
    fn custom_ttl_is_honoured() {
        let (service, scheduler, _) = service();
        let id = service.show("Quick", Severity::Info, Some(Duration::from_millis(100)));
        scheduler.run_frame();

        scheduler.advance(Duration::from_millis(100));

        assert_eq!(service.status(id), Some(NotificationStatus::Dismissing));
    }

    #[test]
    fn manual_dismiss_then_ttl_does_not_double_remove() {
        let (service, scheduler, surface) = service();
        let id = service.show("Bye", Severity::Info, None);
        scheduler.run_frame();

        service.dismiss(id);
        scheduler.advance(DEFAULT_DISMISS_TRANSITION);
        assert_eq!(service.status(id), None);

        scheduler.advance(Duration::from_secs(10));

        let detaches = surface
            .events()
            .into_iter()
            .filter(|e| matches!(e, SurfaceEvent::Detached(_)))
            .count();
        assert_eq!(detaches, 1);
    }

    #[test]
    fn dismiss_twice_is_noop() {
        let (service, scheduler, surface) = service();
        let id = service.show("x", Severity::Info, None);
        scheduler.run_frame();

        service.dismiss(id);
        service.dismiss(id);

        let dismissing = surface
            .events()
            .into_iter()
            .filter(|e| *e == SurfaceEvent::Status(id, NotificationStatus::Dismissing))
            .count();
        assert_eq!(dismissing, 1);
    }

    #[test]
    fn dismiss_before_first_frame_skips_reveal() {
        let (service, scheduler, surface) = service();
        let id = service.show("early", Severity::Error, None);

        service.dismiss(id);
        scheduler.run_frame();

        assert_eq!(service.status(id), Some(NotificationStatus::Dismissing));
        assert!(!surface
            .events()
            .contains(&SurfaceEvent::Status(id, NotificationStatus::Visible)));
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (service, _, surface) = service();
        service.dismiss(NotificationId::new());
        assert!(surface.events().is_empty());
    }

    #[test]
    fn notifications_keep_insertion_order() {
        let (service, _, _) = service();
        let a = service.show("a", Severity::Info, None);
        let b = service.show("b", Severity::Success, None);
        let c = service.show("c", Severity::Error, None);

        let ids: Vec<_> = service.active().iter().map(|e| e.notification.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn timers_are_independent() {
        let (service, scheduler, _) = service();
        let short = service.show("short", Severity::Info, Some(Duration::from_millis(100)));
        let long = service.show("long", Severity::Info, Some(Duration::from_millis(1000)));
        scheduler.run_frame();

        scheduler.advance(Duration::from_millis(400));

        assert_eq!(service.status(short), None);
        assert_eq!(service.status(long), Some(NotificationStatus::Visible));
    }

    #[test]
    fn notifier_uses_queue_default_ttl() {
        let scheduler = Arc::new(ManualScheduler::new());
        let surface = Arc::new(RecordingSurface::new());
        let service = NotificationService::with_timings(
            scheduler.clone(),
            surface,
            NotificationTimings {
                default_ttl: Duration::from_millis(50),
                dismiss_transition: Duration::from_millis(10),
            },
        );

        let id = service.error("boom");
        scheduler.run_frame();
        scheduler.advance(Duration::from_millis(60));

        assert_eq!(service.status(id), None);
    }

    #[test]
    fn dropping_service_cancels_pending_work() {
        let (service, scheduler, surface) = service();
        let id = service.show("gone", Severity::Info, None);
        drop(service);

        scheduler.run_frame();
        scheduler.advance(Duration::from_secs(10));

        assert_eq!(surface.events(), vec![SurfaceEvent::Mounted(id)]);
    }

    /// Surface that tries to dismiss a toast from another thread while the
    /// reveal is still being rendered.
    #[derive(Default)]
    struct RacingSurface {
        service: std::sync::OnceLock<NotificationService>,
        events: Mutex<Vec<SurfaceEvent>>,
        racer: Mutex<Option<std::thread::JoinHandle<()>>>,
    }

    impl NotificationSurface for RacingSurface {
        fn mount(&self, notification: &Notification) {
            self.events
                .lock()
                .unwrap()
                .push(SurfaceEvent::Mounted(notification.id));
        }

        fn apply_status(&self, id: NotificationId, status: NotificationStatus) {
            if status == NotificationStatus::Visible {
                if let Some(service) = self.service.get() {
                    let service = service.clone();
                    *self.racer.lock().unwrap() =
                        Some(std::thread::spawn(move || service.dismiss(id)));
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
            self.events
                .lock()
                .unwrap()
                .push(SurfaceEvent::Status(id, status));
        }

        fn detach(&self, id: NotificationId) {
            self.events.lock().unwrap().push(SurfaceEvent::Detached(id));
        }
    }

    #[test]
    fn concurrent_dismiss_waits_for_reveal_to_render() {
        let scheduler = Arc::new(ManualScheduler::new());
        let surface = Arc::new(RacingSurface::default());
        let service = NotificationService::new(scheduler.clone(), surface.clone());
        let _ = surface.service.set(service.clone());

        let id = service.show("quick", Severity::Info, None);
        scheduler.run_frame();
        let racer = surface.racer.lock().unwrap().take().unwrap();
        racer.join().unwrap();

        assert_eq!(
            *surface.events.lock().unwrap(),
            vec![
                SurfaceEvent::Mounted(id),
                SurfaceEvent::Status(id, NotificationStatus::Visible),
                SurfaceEvent::Status(id, NotificationStatus::Dismissing),
            ]
        );
        assert_eq!(service.status(id), Some(NotificationStatus::Dismissing));
    }
}
