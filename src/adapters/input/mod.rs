//! Input adapters - Where control commands come from.

mod stdin;

pub use stdin::{forward_commands, InputAction, InputMapper};
