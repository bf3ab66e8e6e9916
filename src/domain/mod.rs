//! Domain layer containing the update cycle's rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, percent, state enum, errors)
//! - `progress` - Elapsed-time progress engine with the 99% hold
//! - `rotation` - Cyclic message rotators and the message catalog
//! - `cycle` - The cycle aggregate and its timer vocabulary

pub mod cycle;
pub mod foundation;
pub mod progress;
pub mod rotation;
