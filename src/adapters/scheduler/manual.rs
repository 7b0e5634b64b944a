//! Manual scheduler - a virtual clock for deterministic tests.
//!
//! Nothing runs until the test says so: `run_frame` fires the frame
//! callbacks queued so far, `advance` moves the clock forward firing timers
//! in due order. Tasks run outside the internal lock, so a task may schedule
//! more work.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::ports::{ScheduledTask, Scheduler};

struct Timer {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

#[derive(Default)]
struct State {
    now: Duration,
    seq: u64,
    frames: Vec<ScheduledTask>,
    timers: Vec<Timer>,
}

/// Scheduler driven explicitly by the caller.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<State>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state().now
    }

    pub fn pending_frames(&self) -> usize {
        self.state().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.state().timers.len()
    }

    /// Runs the frame callbacks queued before this call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.state().frames);
        let count = frames.len();
        for task in frames {
            task();
        }
        count
    }

    /// Moves the clock forward by `by`, running every timer that comes due.
    /// Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.state().now = target;
        ran
    }

    /// Runs frames and timers until nothing is pending.
    pub fn run_until_idle(&self) {
        loop {
            self.run_frame();
            let next_due = {
                let state = self.state();
                state.timers.iter().map(|t| t.due).min().map(|due| due.saturating_sub(state.now))
            };
            match next_due {
                Some(wait) => {
                    self.advance(wait);
                }
                None if self.pending_frames() == 0 => break,
                None => {}
            }
        }
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut state = self.state();
        let index = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        let timer = state.timers.swap_remove(index);
        state.now = timer.due;
        Some(timer.task)
    }
}

impl Scheduler for ManualScheduler {
    fn on_next_frame(&self, task: ScheduledTask) {
        self.state().frames.push(task);
    }

    fn after(&self, delay: Duration, task: ScheduledTask) {
        let mut state = self.state();
        let due = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.timers.push(Timer { due, seq, task });
    }
}
