//! Perpetual Update - A system update that never finishes.
//!
//! This crate implements the timer-driven state machine behind a fake
//! progress screen: a scrolling log, a progress bar that holds at 99%,
//! rotating patience lines, and a cancel control that only pretends.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
