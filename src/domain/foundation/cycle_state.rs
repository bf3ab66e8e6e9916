//! CycleState enum for tracking where a cycle is in its lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle state of a single update cycle.
///
/// A new cycle always begins in `Running`. Leaving `Completed` is modelled
/// by replacing the cycle, not by a transition, so `Completed` is terminal
/// for the cycle itself even though the product loops forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    #[default]
    Running,
    Paused,
    Completing,
    Completed,
}

impl CycleState {
    /// Returns true while periodic activity should be producing output.
    pub fn is_running(&self) -> bool {
        matches!(self, CycleState::Running)
    }
}

impl StateMachine for CycleState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CycleState::*;
        matches!(
            (self, target),
            (Running, Paused) | (Paused, Running) | (Running, Completing) | (Completing, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CycleState::*;
        match self {
            Running => vec![Paused, Completing],
            Paused => vec![Running],
            Completing => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleState::Running => "Running",
            CycleState::Paused => "Paused",
            CycleState::Completing => "Completing",
            CycleState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
