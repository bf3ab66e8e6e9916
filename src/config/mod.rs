//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERPETUAL_UPDATE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use perpetual_update::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Progress crawls for {}ms", config.timings.progress_duration_ms);
//! ```

mod behavior;
mod error;
mod timings;

pub use behavior::BehaviorConfig;
pub use error::{ConfigError, ValidationError};
pub use timings::TimingConfig;

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PERPETUAL_UPDATE";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Cadences and delays of the update cycle
    #[serde(default)]
    pub timings: TimingConfig,

    /// Randomized cosmetic behavior
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Tracing filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERPETUAL_UPDATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERPETUAL_UPDATE__TIMINGS__LOG_INTERVAL_MS=500` -> `timings.log_interval_ms = 500`
    /// - `PERPETUAL_UPDATE__BEHAVIOR__RNG_SEED=42` -> `behavior.rng_seed = Some(42)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::load_with_prefix(ENV_PREFIX)
    }

    /// Load configuration from environment variables with a custom prefix.
    pub fn load_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(prefix)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if an interval or duration is zero, or a
    /// probability falls outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.timings.validate()?;
        self.behavior.validate()?;
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timings: TimingConfig::default(),
            behavior: BehaviorConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,perpetual_update=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TEST_PREFIX: &str = "PERPETUAL_UPDATE_TEST";

    fn clear_env() {
        env::remove_var("PERPETUAL_UPDATE_TEST__TIMINGS__LOG_INTERVAL_MS");
        env::remove_var("PERPETUAL_UPDATE_TEST__TIMINGS__PROGRESS_DURATION_MS");
        env::remove_var("PERPETUAL_UPDATE_TEST__BEHAVIOR__RNG_SEED");
        env::remove_var("PERPETUAL_UPDATE_TEST__BEHAVIOR__GLITCH_PROBABILITY");
        env::remove_var("PERPETUAL_UPDATE_TEST__LOG_LEVEL");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_with_prefix(TEST_PREFIX);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.timings, TimingConfig::default());
        assert_eq!(config.behavior, BehaviorConfig::default());
        assert_eq!(config.log_level, "info,perpetual_update=debug");
    }

    #[test]
    fn test_load_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERPETUAL_UPDATE_TEST__TIMINGS__LOG_INTERVAL_MS", "250");
        env::set_var("PERPETUAL_UPDATE_TEST__TIMINGS__PROGRESS_DURATION_MS", "5000");
        env::set_var("PERPETUAL_UPDATE_TEST__BEHAVIOR__RNG_SEED", "42");
        env::set_var("PERPETUAL_UPDATE_TEST__BEHAVIOR__GLITCH_PROBABILITY", "0.5");
        let result = AppConfig::load_with_prefix(TEST_PREFIX);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.timings.log_interval_ms, 250);
        assert_eq!(config.timings.progress_duration_ms, 5000);
        assert_eq!(config.timings.patience_interval_ms, 3000);
        assert_eq!(config.behavior.rng_seed, Some(42));
        assert_eq!(config.behavior.glitch_probability, 0.5);
    }

    #[test]
    fn test_unparseable_value_is_a_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERPETUAL_UPDATE_TEST__TIMINGS__LOG_INTERVAL_MS", "soon");
        let result = AppConfig::load_with_prefix(TEST_PREFIX);
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let config = AppConfig {
            log_level: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogLevel));
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let mut config = AppConfig::default();
        config.timings.log_interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroInterval("log_interval_ms"))
        );
    }
}
