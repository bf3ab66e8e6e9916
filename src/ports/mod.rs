//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the update cycle and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current time for timestamps and progress sampling
//! - `Scheduler` - Cancellable periodic and one-shot timers
//! - `PresentationSink` - Rendering commands for the update screen

mod clock;
mod presentation_sink;
mod scheduler;

pub use clock::Clock;
pub use presentation_sink::PresentationSink;
pub use scheduler::{Scheduler, TimerFired};
