//! Style hint attached to every log line.

use serde::{Deserialize, Serialize};

/// How the presentation layer should render a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogStyle {
    #[default]
    Normal,
    /// Flickering line, chosen at random for rotated messages.
    Glitch,
    /// Red system notice (pause, restart, suspicious activity).
    Alert,
    /// Green system notice (resume).
    Success,
}
