//! TokioScheduler - Timers backed by tokio tasks.
//!
//! Each scheduled task is a spawned tokio task that sends [`TimerFired`]
//! into an unbounded channel. The runtime loop owns the receiving end and
//! feeds firings to the controller one at a time, so the controller never
//! runs concurrently with itself.
//!
//! Cancelling aborts the task. A firing already sitting in the channel is
//! still delivered; the controller discards it by handle.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::cycle::{TaskHandle, TimerEvent};
use crate::ports::{Scheduler, TimerFired};

/// Scheduler that spawns one tokio task per timer.
///
/// Must be used from within a tokio runtime.
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<TimerFired>,
    tasks: HashMap<TaskHandle, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates a scheduler delivering into `sender`.
    pub fn new(sender: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            sender,
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    /// Creates a scheduler together with the receiver its firings arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    /// Number of tasks that have not yet finished or been cancelled.
    pub fn live_tasks(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }

    fn allocate(&mut self) -> TaskHandle {
        // finished one-shots are never cancelled, so sweep them here
        self.tasks.retain(|_, task| !task.is_finished());

        let handle = TaskHandle::new(self.next_id);
        self.next_id += 1;
        handle
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_every(&mut self, event: TimerEvent, period: Duration) -> TaskHandle {
        let handle = self.allocate();
        let sender = self.sender.clone();
        // interval_at panics on a zero period
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(TimerFired { handle, event }).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn schedule_once(&mut self, event: TimerEvent, delay: Duration) -> TaskHandle {
        let handle = self.allocate();
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            time::sleep(delay).await;
            // receiver gone means the runtime is shutting down
            let _ = sender.send(TimerFired { handle, event });
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}
