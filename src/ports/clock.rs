//! Clock port - Where "now" comes from.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
///
/// Used both to timestamp log lines and to sample elapsed-time progress.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
