//! Timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Every delay and cadence of the update cycle, in milliseconds.
///
/// Read once at startup; every cycle uses the same values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Time between scrolling log messages
    #[serde(default = "default_log_interval")]
    pub log_interval_ms: u64,

    /// Time between patience lines
    #[serde(default = "default_patience_interval")]
    pub patience_interval_ms: u64,

    /// Elapsed time needed to crawl from 0% to 99%
    #[serde(default = "default_progress_duration")]
    pub progress_duration_ms: u64,

    /// How long the completion indicator stays visible
    #[serde(default = "default_completion_display")]
    pub completion_display_ms: u64,

    /// Progress sampling cadence
    #[serde(default = "default_progress_tick")]
    pub progress_tick_ms: u64,

    /// Hold at 99% before declaring completion
    #[serde(default = "default_grace_period")]
    pub grace_period_ms: u64,

    /// Delay between 100% and the completion indicator appearing
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,

    /// Hide animation of the completion indicator before the next cycle
    #[serde(default = "default_hide_transition")]
    pub hide_transition_ms: u64,

    /// Delay between a restart request and the reset
    #[serde(default = "default_restart_delay")]
    pub restart_delay_ms: u64,

    /// How long a patience line stays up
    #[serde(default = "default_patience_visible")]
    pub patience_visible_ms: u64,

    /// How long the cancel acknowledgement stays up
    #[serde(default = "default_cancel_ack_visible")]
    pub cancel_ack_visible_ms: u64,
}

impl TimingConfig {
    pub fn log_interval(&self) -> Duration {
        Duration::from_millis(self.log_interval_ms)
    }

    pub fn patience_interval(&self) -> Duration {
        Duration::from_millis(self.patience_interval_ms)
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    /// Validate timing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let intervals = [
            ("log_interval_ms", self.log_interval_ms),
            ("patience_interval_ms", self.patience_interval_ms),
            ("progress_tick_ms", self.progress_tick_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ValidationError::ZeroInterval(name));
            }
        }
        if self.progress_duration_ms == 0 {
            return Err(ValidationError::ZeroDuration("progress_duration_ms"));
        }
        if self.completion_display_ms == 0 {
            return Err(ValidationError::ZeroDuration("completion_display_ms"));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            log_interval_ms: default_log_interval(),
            patience_interval_ms: default_patience_interval(),
            progress_duration_ms: default_progress_duration(),
            completion_display_ms: default_completion_display(),
            progress_tick_ms: default_progress_tick(),
            grace_period_ms: default_grace_period(),
            reveal_delay_ms: default_reveal_delay(),
            hide_transition_ms: default_hide_transition(),
            restart_delay_ms: default_restart_delay(),
            patience_visible_ms: default_patience_visible(),
            cancel_ack_visible_ms: default_cancel_ack_visible(),
        }
    }
}

fn default_log_interval() -> u64 {
    1500
}

fn default_patience_interval() -> u64 {
    3000
}

fn default_progress_duration() -> u64 {
    40_000
}

fn default_completion_display() -> u64 {
    6000
}

fn default_progress_tick() -> u64 {
    100
}

fn default_grace_period() -> u64 {
    1000
}

fn default_reveal_delay() -> u64 {
    500
}

fn default_hide_transition() -> u64 {
    500
}

fn default_restart_delay() -> u64 {
    1000
}

fn default_patience_visible() -> u64 {
    2000
}

fn default_cancel_ack_visible() -> u64 {
    3000
}
