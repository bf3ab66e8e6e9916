//! Rotation module - Endless message lists.
//!
//! - `MessageRotator` - cyclic reader over a fixed list
//! - `catalog` - the log messages, patience lines and system notices

pub mod catalog;
mod rotator;

pub use rotator::MessageRotator;
