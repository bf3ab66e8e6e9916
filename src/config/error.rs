//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Interval '{0}' must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("Duration '{0}' must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("Probability '{0}' must be between 0.0 and 1.0")]
    ProbabilityOutOfRange(&'static str),

    #[error("Log level filter must not be empty")]
    EmptyLogLevel,
}
