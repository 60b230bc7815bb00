//! Custom error types for gateway operations

use thiserror::Error;

/// Gateway-related errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Provider signalled too many requests
    #[error("Too many requests: {message}")]
    RateLimited {
        message: String,
    },

    /// Provider rejected the input
    #[error("Bad request from provider: {message}")]
    ProviderBadRequest {
        message: String,
    },

    /// Provider returned a non-success status
    #[error("Provider error: {status} - {message}")]
    Provider {
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    Network {
        message: String,
    },

    /// Invalid response from provider
    #[error("Invalid response: {message}")]
    InvalidResponse {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
