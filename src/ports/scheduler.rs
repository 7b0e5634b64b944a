//! Scheduler Port - deferred work for UI choreography.
//!
//! Stands in for `requestAnimationFrame` and `setTimeout`. The notification
//! queue drives its state machine exclusively through this port, so tests can
//! step time deterministically.

use std::time::Duration;

/// A unit of deferred work.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks later.
///
/// # Contract
///
/// - Tasks never run synchronously inside the scheduling call.
/// - Each task runs at most once.
/// - Tasks are independent; one task's outcome never cancels another.
pub trait Scheduler: Send + Sync {
    /// Runs `task` on the next animation frame.
    fn on_next_frame(&self, task: ScheduledTask);

    /// Runs `task` once `delay` has elapsed.
    fn after(&self, delay: Duration, task: ScheduledTask);
}
