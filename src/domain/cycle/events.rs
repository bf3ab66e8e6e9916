//! Cycle domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleId, Percent, Timestamp};

/// Events recorded by a cycle as it moves through its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CycleEvent {
    /// A new cycle began at 0%.
    Started {
        cycle_id: CycleId,
        generation: u64,
        started_at: Timestamp,
    },

    /// Periodic activity was frozen.
    Paused { cycle_id: CycleId, percent: Percent },

    /// Periodic activity picked up again from the frozen percent.
    Resumed { cycle_id: CycleId, percent: Percent },

    /// The bar reached 99% and the grace period began.
    HoldReached { cycle_id: CycleId },

    /// The bar jumped to 100%.
    Completed { cycle_id: CycleId },
}
