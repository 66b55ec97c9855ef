//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from validating loaded configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} must be at most {max_ms}ms, got {actual_ms}ms")]
    DelayTooLong {
        field: &'static str,
        max_ms: u64,
        actual_ms: u64,
    },

    #[error("log_level cannot be empty")]
    EmptyLogLevel,
}
