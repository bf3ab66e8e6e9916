//! TerminalSink - indicatif-backed renderer for a terminal.
//!
//! The progress bar sits at the bottom of the screen. Log lines are printed
//! above it with `ProgressBar::println` and scroll away. The bar's message
//! slot carries the transient status: patience line, cancel acknowledgement
//! and completion indicator, each blanked again when hidden.
//!
//! When the draw target is hidden (stdout is not a terminal, or in tests),
//! indicatif draws nothing, so lines go to a plain fallback writer instead.
//! Output failures are traced and otherwise ignored.

use std::io::{self, Stdout, Write};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

use crate::domain::foundation::{LogStyle, Timestamp};
use crate::domain::rotation::catalog;
use crate::ports::PresentationSink;

const BAR_TEMPLATE: &str = "  [{bar:30.green/black}] {pos:>3}%  {wide_msg}";

const PROGRESS_CHARS: &str = "█▓░";

const COMPLETION_TEXT: &str = "✔ UPDATE COMPLETE. Preparing the next update…";

/// Transient text shown next to the bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StatusLine {
    completion: bool,
    acknowledgement: Option<String>,
    patience: Option<String>,
}

impl StatusLine {
    fn render(&self) -> String {
        let mut parts = Vec::new();
        if self.completion {
            parts.push(COMPLETION_TEXT.to_string());
        }
        if let Some(text) = &self.acknowledgement {
            parts.push(format!("✖ {}", text));
        }
        if let Some(text) = &self.patience {
            parts.push(format!("» {}", text));
        }
        parts.join("  ")
    }
}

/// Renders the update screen through an indicatif progress bar.
pub struct TerminalSink<W: Write + Send = Stdout> {
    bar: ProgressBar,
    fallback: W,
    status: StatusLine,
    last_progress: Option<u8>,
}

impl TerminalSink<Stdout> {
    /// Draws to stdout. indicatif hides the bar when stdout is not a
    /// terminal; plain lines are then written to stdout directly.
    pub fn stdout() -> Self {
        Self::new(ProgressDrawTarget::stdout(), io::stdout())
    }
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(target: ProgressDrawTarget, fallback: W) -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), target);
        bar.set_style(bar_style());
        Self {
            bar,
            fallback,
            status: StatusLine::default(),
            last_progress: None,
        }
    }

    /// Prints the startup banner.
    pub fn banner(&mut self) {
        for line in catalog::BANNER {
            self.print_line(line);
        }
        self.print_line("");
    }

    /// The underlying bar.
    pub fn progress_bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Consumes the sink, returning the fallback writer.
    pub fn into_inner(self) -> W {
        self.bar.finish_and_clear();
        self.fallback
    }

    fn print_line(&mut self, line: &str) {
        if !self.bar.is_hidden() {
            self.bar.println(line);
            return;
        }
        let result = writeln!(self.fallback, "{}", line).and_then(|_| self.fallback.flush());
        if let Err(e) = result {
            warn!(error = %e, "terminal write failed");
        }
    }

    fn refresh_status(&mut self) {
        self.bar.set_message(self.status.render());
    }
}

fn bar_style() -> ProgressStyle {
    match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => style.progress_chars(PROGRESS_CHARS),
        Err(e) => {
            warn!(error = %e, "invalid progress template, using the default bar");
            ProgressStyle::default_bar()
        }
    }
}

/// Formats one log line as `<marker>[HH:MM:SS] text`.
pub fn format_log_line(text: &str, timestamp: Timestamp, style: LogStyle) -> String {
    format!("{}[{}] {}", style_marker(style), timestamp.clock_time(), text)
}

fn style_marker(style: LogStyle) -> &'static str {
    match style {
        LogStyle::Normal => "  ",
        LogStyle::Glitch => "~ ",
        LogStyle::Alert => "! ",
        LogStyle::Success => "+ ",
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn append_log_line(&mut self, text: &str, timestamp: Timestamp, style: LogStyle) {
        let line = format_log_line(text, timestamp, style);
        self.print_line(&line);
    }

    fn clear_log(&mut self) {
        self.bar.reset();
        self.last_progress = None;
        self.status = StatusLine::default();
        self.refresh_status();
        self.print_line(&"─".repeat(40));
    }

    fn set_progress_text(&mut self, percent: u8) {
        let percent = percent.min(100);
        if self.last_progress == Some(percent) {
            return;
        }
        self.last_progress = Some(percent);
        self.bar.set_position(u64::from(percent));
        if self.bar.is_hidden() {
            self.print_line(&format!("  {}%", percent));
        }
    }

    fn set_patience_line(&mut self, text: &str) {
        self.status.patience = Some(text.to_string());
        self.refresh_status();
        if self.bar.is_hidden() {
            self.print_line(&format!("  » {}", text));
        }
    }

    fn clear_patience_line(&mut self) {
        self.status.patience = None;
        self.refresh_status();
    }

    fn show_completion_indicator(&mut self) {
        self.status.completion = true;
        self.refresh_status();
        if self.bar.is_hidden() {
            self.print_line(&format!("  {}", COMPLETION_TEXT));
        }
    }

    fn hide_completion_indicator(&mut self) {
        self.status.completion = false;
        self.refresh_status();
    }

    fn show_cancel_acknowledgement(&mut self, text: &str) {
        self.status.acknowledgement = Some(text.to_string());
        self.refresh_status();
        if self.bar.is_hidden() {
            self.print_line(&format!("  ✖ {}", text));
        }
    }

    fn hide_cancel_acknowledgement(&mut self) {
        self.status.acknowledgement = None;
        self.refresh_status();
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_sink() -> TerminalSink<Vec<u8>> {
        TerminalSink::new(ProgressDrawTarget::hidden(), Vec::new())
    }

    fn output(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn bar_tracks_progress_out_of_one_hundred() {
        let mut sink = hidden_sink();
        sink.set_progress_text(42);

        assert_eq!(sink.progress_bar().length(), Some(100));
        assert_eq!(sink.progress_bar().position(), 42);

        sink.set_progress_text(250);
        assert_eq!(sink.progress_bar().position(), 100);
    }

    #[test]
    fn log_line_has_marker_and_clock() {
        let ts = Timestamp::from_unix_millis(1_705_314_600_000);
        let line = format_log_line("SYSTEM PAUSED", ts, LogStyle::Alert);

        assert!(line.starts_with("! ["));
        assert!(line.ends_with("] SYSTEM PAUSED"));
        assert_eq!(line.len(), "! [HH:MM:SS] SYSTEM PAUSED".len());
    }

    #[test]
    fn hidden_bar_falls_back_to_plain_lines() {
        let mut sink = hidden_sink();
        let ts = Timestamp::from_unix_millis(0);
        sink.append_log_line("Patching reality.dll…", ts, LogStyle::Glitch);

        let text = output(sink);
        assert!(text.starts_with("~ ["));
        assert!(text.contains("Patching reality.dll…"));
    }

    #[test]
    fn unchanged_progress_is_not_repeated() {
        let mut sink = hidden_sink();
        sink.set_progress_text(3);
        sink.set_progress_text(3);
        sink.set_progress_text(4);

        let text = output(sink);
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["  3%", "  4%"]);
    }

    #[test]
    fn patience_line_is_blanked_when_cleared() {
        let mut sink = hidden_sink();
        sink.set_patience_line(catalog::PATIENCE_LINES[0]);
        assert!(sink
            .progress_bar()
            .message()
            .contains(catalog::PATIENCE_LINES[0]));

        sink.clear_patience_line();
        assert!(sink.progress_bar().message().is_empty());
    }

    #[test]
    fn cancel_acknowledgement_is_shown_and_hidden() {
        let mut sink = hidden_sink();
        sink.set_patience_line("wait");
        sink.show_cancel_acknowledgement(catalog::CANCEL_ACKNOWLEDGEMENT);
        let shown = sink.progress_bar().message();
        assert!(shown.contains(catalog::CANCEL_ACKNOWLEDGEMENT));
        assert!(shown.contains("wait"));

        sink.hide_cancel_acknowledgement();
        assert_eq!(sink.progress_bar().message(), "» wait");
    }

    #[test]
    fn completion_indicator_occupies_the_status_until_hidden() {
        let mut sink = hidden_sink();
        sink.show_completion_indicator();
        assert_eq!(sink.progress_bar().message(), COMPLETION_TEXT);

        sink.hide_completion_indicator();
        assert!(sink.progress_bar().message().is_empty());
    }

    #[test]
    fn clear_log_resets_the_bar_and_status() {
        let mut sink = hidden_sink();
        sink.set_progress_text(77);
        sink.show_cancel_acknowledgement(catalog::CANCEL_ACKNOWLEDGEMENT);
        sink.clear_log();

        assert_eq!(sink.progress_bar().position(), 0);
        assert!(sink.progress_bar().message().is_empty());

        sink.set_progress_text(0);
        assert!(output(sink).lines().any(|line| line == "  0%"));
    }

    #[test]
    fn finish_clears_the_bar() {
        let mut sink = hidden_sink();
        sink.set_progress_text(12);
        sink.finish();
        assert!(sink.progress_bar().is_finished());
    }

    #[test]
    fn banner_prints_every_line() {
        let mut sink = hidden_sink();
        sink.banner();
        let text = output(sink);
        for line in catalog::BANNER {
            assert!(text.contains(line));
        }
    }
}
