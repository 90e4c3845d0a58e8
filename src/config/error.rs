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

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid public base URL")]
    InvalidBaseUrl,

    #[error("Public base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Minimum donation amount must be greater than zero")]
    InvalidMinimumAmount,

    #[error("Callback path must start with '/': {0}")]
    InvalidCallbackPath(&'static str),

    #[error("Notification retention and prune interval must be greater than zero")]
    InvalidRetention,

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(&'static str),
}
