//! Scheduler adapters.
//!
//! - `TokioScheduler` - real timers
//! - `ManualScheduler` - virtual clock for tests

mod manual;
mod tokio_scheduler;

pub use manual::ManualScheduler;
pub use tokio_scheduler::{TokioScheduler, DEFAULT_FRAME_INTERVAL};
