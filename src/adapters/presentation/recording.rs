//! In-memory presentation sink for testing.
//!
//! Records every rendering command in order so tests can assert on what the
//! screen would have shown.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::{Arc, Mutex};

use crate::domain::foundation::{LogStyle, Timestamp};
use crate::ports::PresentationSink;

/// One rendering command, as received by the sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    AppendLogLine {
        text: String,
        timestamp: Timestamp,
        style: LogStyle,
    },
    ClearLog,
    SetProgressText(u8),
    SetPatienceLine(String),
    ClearPatienceLine,
    ShowCompletionIndicator,
    HideCompletionIndicator,
    ShowCancelAcknowledgement(String),
    HideCancelAcknowledgement,
    Finish,
}

/// Sink that records commands. Clones share the same record.
///
/// # Example
///
/// ```ignore
/// let sink = RecordingSink::new();
/// let controller = CycleController::new(timings, behavior, clock, scheduler, Box::new(sink.clone()));
///
/// assert_eq!(sink.last_progress(), Some(0));
/// assert_eq!(sink.log_lines(), vec!["Installing chaos.exe…"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Arc<Mutex<Vec<SinkCommand>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns every command recorded so far.
    pub fn commands(&self) -> Vec<SinkCommand> {
        self.lock().clone()
    }

    /// Returns the texts of every appended log line, across log clears.
    pub fn log_lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|command| match command {
                SinkCommand::AppendLogLine { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns appended log lines together with their style.
    pub fn styled_log_lines(&self) -> Vec<(String, LogStyle)> {
        self.lock()
            .iter()
            .filter_map(|command| match command {
                SinkCommand::AppendLogLine { text, style, .. } => Some((text.clone(), *style)),
                _ => None,
            })
            .collect()
    }

    /// Returns the patience lines shown, in order.
    pub fn patience_lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|command| match command {
                SinkCommand::SetPatienceLine(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the most recent progress text.
    pub fn last_progress(&self) -> Option<u8> {
        self.lock().iter().rev().find_map(|command| match command {
            SinkCommand::SetProgressText(percent) => Some(*percent),
            _ => None,
        })
    }

    /// Counts recorded commands equal to `command`.
    pub fn count(&self, command: &SinkCommand) -> usize {
        self.lock().iter().filter(|c| *c == command).count()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkCommand>> {
        self.commands
            .lock()
            .expect("RecordingSink: commands lock poisoned")
    }

    fn record(&self, command: SinkCommand) {
        self.lock().push(command);
    }
}

impl PresentationSink for RecordingSink {
    fn append_log_line(&mut self, text: &str, timestamp: Timestamp, style: LogStyle) {
        self.record(SinkCommand::AppendLogLine {
            text: text.to_string(),
            timestamp,
            style,
        });
    }

    fn clear_log(&mut self) {
        self.record(SinkCommand::ClearLog);
    }

    fn set_progress_text(&mut self, percent: u8) {
        self.record(SinkCommand::SetProgressText(percent));
    }

    fn set_patience_line(&mut self, text: &str) {
        self.record(SinkCommand::SetPatienceLine(text.to_string()));
    }

    fn clear_patience_line(&mut self) {
        self.record(SinkCommand::ClearPatienceLine);
    }

    fn show_completion_indicator(&mut self) {
        self.record(SinkCommand::ShowCompletionIndicator);
    }

    fn hide_completion_indicator(&mut self) {
        self.record(SinkCommand::HideCompletionIndicator);
    }

    fn show_cancel_acknowledgement(&mut self, text: &str) {
        self.record(SinkCommand::ShowCancelAcknowledgement(text.to_string()));
    }

    fn hide_cancel_acknowledgement(&mut self) {
        self.record(SinkCommand::HideCancelAcknowledgement);
    }

    fn finish(&mut self) {
        self.record(SinkCommand::Finish);
    }
}
