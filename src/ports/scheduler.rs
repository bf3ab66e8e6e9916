//! Scheduler port - Explicit, cancellable timers.
//!
//! Every scheduled task is identified by a [`TaskHandle`]. When a task fires,
//! the adapter delivers a [`TimerFired`] carrying that handle back to the
//! cycle controller, which decides whether the firing is still current.
//!
//! Adapters are not required to guarantee that nothing fires after
//! `cancel`; a firing already queued may still arrive. The controller
//! guards against this by checking handles against its task registry.

use std::time::Duration;

use crate::domain::cycle::{TaskHandle, TimerEvent};

/// A task firing delivered back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub handle: TaskHandle,
    pub event: TimerEvent,
}

/// Port for scheduling periodic and one-shot timer events.
pub trait Scheduler: Send {
    /// Fires `event` every `period`, first after one full period.
    fn schedule_every(&mut self, event: TimerEvent, period: Duration) -> TaskHandle;

    /// Fires `event` once after `delay`.
    fn schedule_once(&mut self, event: TimerEvent, delay: Duration) -> TaskHandle;

    /// Stops a task. Cancelling an unknown or finished task is a no-op.
    fn cancel(&mut self, handle: TaskHandle);
}
