//! Runtime error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the update from running.
///
/// The cycle itself never fails; these come from its surroundings.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    #[error("Timer channel closed while the update was running")]
    TimerChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;

    #[test]
    fn wraps_config_validation_failures() {
        let err: RuntimeError =
            ConfigError::from(ValidationError::ZeroInterval("log_interval_ms")).into();
        assert!(matches!(err, RuntimeError::Config(_)));
        assert!(err.to_string().contains("log_interval_ms"));
    }

    #[test]
    fn wraps_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin gone");
        let err: RuntimeError = io.into();
        assert_eq!(err.to_string(), "Input error: stdin gone");
    }
}
