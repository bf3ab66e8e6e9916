//! Scheduler adapters.
//!
//! - `TokioScheduler` - real timers, one tokio task per scheduled task
//! - `ManualScheduler` - virtual time, advanced explicitly by tests

mod manual;
mod tokio_scheduler;

pub use manual::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;
