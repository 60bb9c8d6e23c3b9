//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter setup
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors that can occur while building the HTTP gateway
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
