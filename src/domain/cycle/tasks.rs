//! Registry of the scheduled tasks a cycle currently owns.

use std::collections::HashMap;

use super::{TaskHandle, TaskKind, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registration {
    event: TimerEvent,
    kind: TaskKind,
}

/// Every live task handle of a cycle, keyed by handle.
///
/// A firing is only honoured if its handle is still registered for the same
/// event. Handles cancelled by a transition are removed here first, so any
/// firing already in flight for them is recognised as stale.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskHandle, Registration>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly scheduled task.
    pub fn register(&mut self, handle: TaskHandle, event: TimerEvent, kind: TaskKind) {
        self.tasks.insert(handle, Registration { event, kind });
    }

    /// Checks a firing against the registry.
    ///
    /// Returns true if the firing belongs to a live task. One-shot tasks are
    /// deregistered by the firing that consumes them.
    pub fn accept(&mut self, handle: TaskHandle, event: TimerEvent) -> bool {
        match self.tasks.get(&handle) {
            Some(reg) if reg.event == event => {
                if reg.kind == TaskKind::OneShot {
                    self.tasks.remove(&handle);
                }
                true
            }
            _ => false,
        }
    }

    /// Removes and returns every handle registered for `event`.
    pub fn remove_event(&mut self, event: TimerEvent) -> Vec<TaskHandle> {
        let handles: Vec<TaskHandle> = self
            .tasks
            .iter()
            .filter(|(_, reg)| reg.event == event)
            .map(|(handle, _)| *handle)
            .collect();
        for handle in &handles {
            self.tasks.remove(handle);
        }
        handles
    }

    /// Removes and returns every handle.
    pub fn drain(&mut self) -> Vec<TaskHandle> {
        let mut handles: Vec<TaskHandle> = self.tasks.drain().map(|(handle, _)| handle).collect();
        handles.sort_unstable();
        handles
    }

    /// Returns true if at least one task is registered for `event`.
    pub fn is_scheduled(&self, event: TimerEvent) -> bool {
        self.tasks.values().any(|reg| reg.event == event)
    }

    /// Number of tasks registered for `event`.
    pub fn count(&self, event: TimerEvent) -> usize {
        self.tasks.values().filter(|reg| reg.event == event).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
