//! Virtual clock for deterministic tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Default origin: 2024-01-15T10:30:00Z.
const DEFAULT_ORIGIN_MILLIS: i64 = 1_705_314_600_000;

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock at the default origin.
    pub fn new() -> Self {
        Self::starting_at(DEFAULT_ORIGIN_MILLIS)
    }

    /// Creates a clock at the given Unix milliseconds.
    pub fn starting_at(unix_millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(unix_millis)),
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }

    pub fn set_millis(&self, unix_millis: i64) {
        self.millis.store(unix_millis, Ordering::SeqCst);
    }

    pub fn advance_millis(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix_millis(self.now_millis())
    }
}
