//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the update cycle.

mod cycle_state;
mod errors;
mod ids;
mod log_style;
mod percentage;
mod state_machine;
mod timestamp;

pub use cycle_state::CycleState;
pub use errors::ValidationError;
pub use ids::CycleId;
pub use log_style::LogStyle;
pub use percentage::Percent;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
