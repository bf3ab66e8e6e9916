//! Percent value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fractional value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// The highest value elapsed time alone can produce.
    pub const HOLD: Self = Self(99.0);

    /// One hundred percent. Only reachable through finalization.
    pub const COMPLETE: Self = Self(100.0);

    /// Creates a new Percent, clamping to the valid range.
    ///
    /// NaN maps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value floored to a whole percent, as shown to the user.
    pub fn whole(&self) -> u8 {
        self.0.floor() as u8
    }

    /// Returns true once the bar has been finalized.
    pub fn is_complete(&self) -> bool {
        self.0 >= 100.0
    }

    /// Returns true once elapsed time has pushed the bar to the hold point.
    pub fn has_reached_hold(&self) -> bool {
        self.0 >= Self::HOLD.0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.whole())
    }
}
