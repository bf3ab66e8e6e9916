//! Behavior configuration

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use super::error::ValidationError;

/// Randomized cosmetic behavior
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BehaviorConfig {
    /// Chance a rotated log message is rendered glitched
    #[serde(default = "default_glitch_probability")]
    pub glitch_probability: f64,

    /// Chance that regaining attention earns a "welcome back" line
    #[serde(default = "default_welcome_back_probability")]
    pub welcome_back_probability: f64,

    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl BehaviorConfig {
    /// Builds the random source, seeded if `rng_seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Validate behavior configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.glitch_probability) {
            return Err(ValidationError::ProbabilityOutOfRange("glitch_probability"));
        }
        if !(0.0..=1.0).contains(&self.welcome_back_probability) {
            return Err(ValidationError::ProbabilityOutOfRange(
                "welcome_back_probability",
            ));
        }
        Ok(())
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            glitch_probability: default_glitch_probability(),
            welcome_back_probability: default_welcome_back_probability(),
            rng_seed: None,
        }
    }
}

fn default_glitch_probability() -> f64 {
    0.3
}

fn default_welcome_back_probability() -> f64 {
    0.3
}
