//! Timer vocabulary: what can fire, and the handle that identifies it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one scheduled task.
///
/// Handles are issued by a scheduler and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Whether a task fires once or until cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Repeating,
    OneShot,
}

/// Everything the cycle can be woken up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerEvent {
    // Periodic roles
    LogTick,
    PatienceTick,
    ProgressTick,

    // Lifecycle one-shots
    GraceElapsed,
    RevealIndicator,
    HideIndicator,
    IndicatorHidden,
    RestartDue,

    // Cosmetic one-shots
    HidePatienceLine,
    HideCancelAcknowledgement,
    ContextMenuNotice,
    AttentionLostNotice,
    WelcomeBackNotice,
}

impl TimerEvent {
    /// The three periodic roles, suspended together on pause.
    pub const PERIODIC: [TimerEvent; 3] = [
        TimerEvent::LogTick,
        TimerEvent::PatienceTick,
        TimerEvent::ProgressTick,
    ];

    pub fn is_periodic(&self) -> bool {
        Self::PERIODIC.contains(self)
    }
}
