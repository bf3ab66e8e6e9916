//! Presentation sink adapters.

mod recording;
mod terminal;

pub use recording::{RecordingSink, SinkCommand};
pub use terminal::{format_log_line, TerminalSink};
