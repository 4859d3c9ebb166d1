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

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid upstream timeout")]
    InvalidTimeout,

    #[error("Upstream URL must start with http:// or https://: {0}")]
    InvalidUpstreamUrl(&'static str),

    #[error("Self-signed upstream certificates cannot be accepted in production")]
    InsecureTlsInProduction,
}
