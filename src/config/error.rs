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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Notification timing must be greater than zero: {0}")]
    InvalidTiming(&'static str),

    #[error("Upload size limit must be greater than zero")]
    InvalidUploadLimit,

    #[error("No upload extensions configured")]
    NoUploadExtensions,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
