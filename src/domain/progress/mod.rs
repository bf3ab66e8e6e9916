//! Progress module - The bar that crawls to 99% and waits.

mod engine;
mod snapshot;

pub use engine::{compute_progress, resume_start, ProgressEngine};
pub use snapshot::ProgressSnapshot;
