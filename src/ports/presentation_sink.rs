//! PresentationSink port - Rendering commands issued by the cycle.
//!
//! The controller never renders anything itself. It issues these commands
//! and the adapter decides what they look like (terminal output, recorded
//! commands in tests, ...). All methods are infallible from the
//! controller's point of view; adapters handle their own output failures.

use crate::domain::foundation::{LogStyle, Timestamp};

/// Port for the screen the update is shown on.
pub trait PresentationSink: Send {
    /// Appends one line to the scrolling log.
    fn append_log_line(&mut self, text: &str, timestamp: Timestamp, style: LogStyle);

    /// Removes every log line (a new cycle starts with an empty log).
    fn clear_log(&mut self);

    /// Shows the whole-number progress percent.
    fn set_progress_text(&mut self, percent: u8);

    fn set_patience_line(&mut self, text: &str);

    fn clear_patience_line(&mut self);

    fn show_completion_indicator(&mut self);

    fn hide_completion_indicator(&mut self);

    /// Shows the mocking response to a cancel request.
    fn show_cancel_acknowledgement(&mut self, text: &str);

    fn hide_cancel_acknowledgement(&mut self);

    /// Tears the screen down once the update is abandoned.
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn PresentationSink) {}
}
