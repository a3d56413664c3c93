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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Model base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Model max_tokens must be positive")]
    InvalidMaxTokens,

    #[error("max_input_chars must be between 1 and 20000")]
    InvalidMaxInputChars,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
