//! Tokio scheduler - real timers on a tokio runtime.
//!
//! A "frame" is a fixed short delay, since there is no display refresh to
//! hook into outside a browser.

use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};

use crate::ports::{ScheduledTask, Scheduler};

/// Default frame interval (about 60 frames per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Scheduler spawning one sleeping task per scheduled callback.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
    frame_interval: Duration,
}

impl TokioScheduler {
    pub fn new(handle: Handle, frame_interval: Duration) -> Self {
        Self {
            handle,
            frame_interval,
        }
    }

    /// Uses the runtime the caller is running on.
    pub fn from_current(frame_interval: Duration) -> Result<Self, TryCurrentError> {
        Ok(Self::new(Handle::try_current()?, frame_interval))
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    fn spawn_after(&self, delay: Duration, task: ScheduledTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

impl Scheduler for TokioScheduler {
    fn on_next_frame(&self, task: ScheduledTask) {
        self.spawn_after(self.frame_interval, task);
    }

    fn after(&self, delay: Duration, task: ScheduledTask) {
        self.spawn_after(delay, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;
    use tokio::time::timeout;

    #[tokio::test]
    async fn after_runs_task_later() {
        let scheduler = TokioScheduler::from_current(DEFAULT_FRAME_INTERVAL).unwrap();
        let (tx, rx) = oneshot::channel();

        scheduler.after(
            Duration::from_millis(5),
            Box::new(move || {
                let _ = tx.send("fired");
            }),
        );

        let value = timeout(Duration::from_secs(2), rx).await.unwrap().unwrap();
        assert_eq!(value, "fired");
    }

    #[tokio::test]
    async fn next_frame_runs_task() {
        let scheduler = TokioScheduler::from_current(Duration::from_millis(1)).unwrap();
        let (tx, rx) = oneshot::channel();

        scheduler.on_next_frame(Box::new(move || {
            let _ = tx.send(());
        }));

        assert!(timeout(Duration::from_secs(2), rx).await.is_ok());
    }

    #[test]
    fn from_current_outside_runtime_fails() {
        assert!(TokioScheduler::from_current(DEFAULT_FRAME_INTERVAL).is_err());
    }
}
