//! ManualScheduler - Deterministic virtual-time scheduler for tests.
//!
//! Nothing fires on its own. A test advances virtual time with
//! [`ManualScheduler::run_for`], which moves the shared [`ManualClock`] to
//! each due time in order and hands the firing to a dispatch closure.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. This adapter is for
//! testing and simulation only.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::clock::ManualClock;
use crate::domain::cycle::{TaskHandle, TimerEvent};
use crate::ports::{Scheduler, TimerFired};

#[derive(Debug, Clone)]
struct Entry {
    handle: TaskHandle,
    event: TimerEvent,
    due_millis: i64,
    period_millis: Option<i64>,
    sequence: u64,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    next_id: u64,
    next_sequence: u64,
}

impl State {
    fn sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}

/// Virtual-time scheduler. Clones share the same queue and clock.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    state: Arc<Mutex<State>>,
    clock: ManualClock,
}

impl ManualScheduler {
    /// Creates a scheduler that reads and moves `clock`.
    pub fn new(clock: ManualClock) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            clock,
        }
    }

    /// Returns the clock this scheduler drives.
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.lock().entries.len()
    }

    /// Number of waiting tasks for `event`.
    pub fn pending_for(&self, event: TimerEvent) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }

    /// Virtual time of the next firing, if any.
    pub fn next_due_millis(&self) -> Option<i64> {
        self.lock().entries.iter().map(|entry| entry.due_millis).min()
    }

    /// Advances virtual time by `millis`, dispatching every firing due on the
    /// way in time order. Firings due at the same instant dispatch in the
    /// order they were scheduled.
    ///
    /// Tasks scheduled by `dispatch` itself are honoured if they fall due
    /// inside the window. Returns the number of firings dispatched.
    pub fn run_for<F>(&self, millis: u64, mut dispatch: F) -> usize
    where
        F: FnMut(TimerFired),
    {
        let until = self.clock.now_millis() + millis as i64;
        let mut dispatched = 0;

        while let Some((due, fired)) = self.pop_due(until) {
            self.clock.set_millis(due);
            dispatch(fired);
            dispatched += 1;
        }

        self.clock.set_millis(until);
        dispatched
    }

    fn pop_due(&self, until: i64) -> Option<(i64, TimerFired)> {
        let mut state = self.lock();
        let position = state
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_millis <= until)
            .min_by_key(|(_, entry)| (entry.due_millis, entry.sequence))
            .map(|(position, _)| position)?;

        let entry = state.entries[position].clone();
        match entry.period_millis {
            Some(period) => {
                let sequence = state.sequence();
                let slot = &mut state.entries[position];
                slot.due_millis += period;
                slot.sequence = sequence;
            }
            None => {
                state.entries.remove(position);
            }
        }

        Some((
            entry.due_millis,
            TimerFired {
                handle: entry.handle,
                event: entry.event,
            },
        ))
    }

    fn push(&self, event: TimerEvent, delay: Duration, repeating: bool) -> TaskHandle {
        let now = self.clock.now_millis();
        let delay_millis = delay.as_millis() as i64;
        let mut state = self.lock();

        state.next_id += 1;
        let handle = TaskHandle::new(state.next_id);
        let sequence = state.sequence();
        state.entries.push(Entry {
            handle,
            event,
            due_millis: now + delay_millis,
            // a zero period would never let virtual time move on
            period_millis: repeating.then_some(delay_millis.max(1)),
            sequence,
        });
        handle
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state
            .lock()
            .expect("ManualScheduler: state lock poisoned")
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_every(&mut self, event: TimerEvent, period: Duration) -> TaskHandle {
        self.push(event, period, true)
    }

    fn schedule_once(&mut self, event: TimerEvent, delay: Duration) -> TaskHandle {
        self.push(event, delay, false)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.lock().entries.retain(|entry| entry.handle != handle);
    }
}
