//! Application layer - Commands and the loop that applies them.
//!
//! The controller orchestrates the cycle domain through the ports; the
//! runtime feeds it commands and timer firings one at a time.

mod commands;
mod controller;
mod error;
mod runtime;

pub use commands::ControlCommand;
pub use controller::{
    CycleController, ATTENTION_LOST_NOTICE_DELAY_MS, CONTEXT_MENU_NOTICE_DELAY_MS,
    WELCOME_BACK_NOTICE_DELAY_MS,
};
pub use error::RuntimeError;
pub use runtime::CycleRuntime;
