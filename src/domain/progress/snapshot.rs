//! ProgressSnapshot value object.

use serde::Serialize;

use crate::domain::foundation::{Percent, Timestamp};

/// Read-only view of a cycle's progress at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Current percent in [0, 100]. Exactly 100 only after finalization.
    pub percent: Percent,

    /// Milliseconds since the effective start time.
    pub elapsed_ms: u64,

    /// Effective start time, backdated on every resume.
    pub start_time: Timestamp,
}
