//! Control commands - Every request the outside world can make of the cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Command issued by a front-end to the cycle controller.
///
/// Commands never fail. A command that does not apply in the current state
/// is ignored by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlCommand {
    /// Pause a running cycle, or resume a paused one.
    TogglePause,

    /// Reset to a fresh cycle after the restart delay.
    Restart,

    /// Ask to cancel. Acknowledged, never honoured.
    Cancel,

    ContextMenu,

    /// The user looked away.
    AttentionLost,

    /// The user came back.
    AttentionRegained,
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ControlCommand::TogglePause => "toggle_pause",
            ControlCommand::Restart => "restart",
            ControlCommand::Cancel => "cancel",
            ControlCommand::ContextMenu => "context_menu",
            ControlCommand::AttentionLost => "attention_lost",
            ControlCommand::AttentionRegained => "attention_regained",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        let json = serde_json::to_string(&ControlCommand::AttentionRegained).unwrap();
        assert_eq!(json, format!("\"{}\"", ControlCommand::AttentionRegained));
    }

    #[test]
    fn deserializes_from_snake_case() {
        let command: ControlCommand = serde_json::from_str("\"toggle_pause\"").unwrap();
        assert_eq!(command, ControlCommand::TogglePause);
    }
}
