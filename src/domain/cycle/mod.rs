//! Cycle module - One run of the update from 0% to reset.
//!
//! - `Cycle` - aggregate owning progress, rotators and task handles
//! - `TaskRegistry` - live task handles, for idempotent teardown
//! - `TimerEvent` / `TaskHandle` - what fires and which task fired it

mod aggregate;
mod events;
mod tasks;
mod timers;

pub use aggregate::Cycle;
pub use events::CycleEvent;
pub use tasks::TaskRegistry;
pub use timers::{TaskHandle, TaskKind, TimerEvent};
