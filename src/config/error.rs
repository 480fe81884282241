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
    #[error("Telegram bot token is missing")]
    MissingBotToken,

    #[error("Telegram API base URL must be an http(s) URL")]
    InvalidApiBaseUrl,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Review page size must be between 1 and 200")]
    InvalidPageSize,

    #[error("Maximum page count must be at least 1")]
    InvalidMaxPages,

    #[error("Review source locale values cannot be empty")]
    InvalidLocale,
}
