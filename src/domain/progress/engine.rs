//! Elapsed-time progress with a hard hold at 99%.
//!
//! Progress is a linear function of elapsed time that tops out at
//! [`Percent::HOLD`]. The final jump to 100% is a separate, explicit
//! [`ProgressEngine::finalize`] call. Pausing keeps the last sample and
//! resuming backdates the start time so the curve picks up where it stopped.

use crate::domain::foundation::{Percent, Timestamp};

use super::ProgressSnapshot;

const HOLD: f64 = 99.0;

/// Computes progress for `now` given a start time and a target duration.
///
/// Returns `min(elapsed / duration * 99, 99)`. Time before `start` counts as
/// zero elapsed. A zero duration is treated as already elapsed.
pub fn compute_progress(start: Timestamp, now: Timestamp, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return HOLD;
    }
    let elapsed = now.millis_since(&start).max(0) as f64;
    (elapsed / duration_ms as f64 * HOLD).min(HOLD)
}

/// Start time that makes [`compute_progress`] at `now` reproduce `stored`.
///
/// `start' = now - (stored / 99) * duration`. The offset is floored to whole
/// milliseconds, so the reproduced value never overshoots `stored`.
pub fn resume_start(now: Timestamp, stored: Percent, duration_ms: u64) -> Timestamp {
    let fraction = stored.value().min(HOLD) / HOLD;
    let offset = (fraction * duration_ms as f64).floor() as i64;
    now.minus_millis(offset)
}

/// Owns the progress curve of one cycle.
#[derive(Debug, Clone)]
pub struct ProgressEngine {
    duration_ms: u64,
    start_time: Timestamp,
    percent: Percent,
}

impl ProgressEngine {
    /// Starts a fresh curve at 0% beginning at `now`.
    pub fn start(duration_ms: u64, now: Timestamp) -> Self {
        Self {
            duration_ms,
            start_time: now,
            percent: Percent::ZERO,
        }
    }

    /// Samples the curve at `now`.
    ///
    /// The stored percent never decreases, even if the clock steps backwards,
    /// and a finalized bar stays at 100%.
    pub fn sample(&mut self, now: Timestamp) -> Percent {
        if self.percent.is_complete() {
            return self.percent;
        }
        let computed = Percent::new(compute_progress(self.start_time, now, self.duration_ms));
        if computed > self.percent {
            self.percent = computed;
        }
        self.percent
    }

    /// Backdates the start time so the next sample continues from the stored
    /// percent instead of counting the paused interval.
    pub fn resume(&mut self, now: Timestamp) {
        if self.percent.is_complete() {
            return;
        }
        self.start_time = resume_start(now, self.percent, self.duration_ms);
    }

    /// Jumps to exactly 100%.
    pub fn finalize(&mut self) {
        self.percent = Percent::COMPLETE;
    }

    pub fn percent(&self) -> Percent {
        self.percent
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// True once elapsed time has pushed the bar to 99%.
    pub fn has_reached_hold(&self) -> bool {
        self.percent.has_reached_hold()
    }

    /// Point-in-time view of the curve.
    pub fn snapshot(&self, now: Timestamp) -> ProgressSnapshot {
        ProgressSnapshot {
            percent: self.percent,
            elapsed_ms: now.millis_since(&self.start_time).max(0) as u64,
            start_time: self.start_time,
        }
    }
}
