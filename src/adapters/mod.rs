//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the update cycle to the outside world:
//! - `clock` - System and manually driven clocks
//! - `scheduler` - Tokio-backed and virtual-time schedulers
//! - `presentation` - Terminal renderer and recording sink
//! - `input` - Line-based keyboard front-end

pub mod clock;
pub mod input;
pub mod presentation;
pub mod scheduler;

pub use clock::{ManualClock, SystemClock};
pub use input::{forward_commands, InputAction, InputMapper};
pub use presentation::{RecordingSink, SinkCommand, TerminalSink};
pub use scheduler::{ManualScheduler, TokioScheduler};
