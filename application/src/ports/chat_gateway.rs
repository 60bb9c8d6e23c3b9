//! Chat Gateway port
//!
//! Defines the interface for relaying one user message to the chat backend.

use async_trait::async_trait;
use thiserror::Error;
use zar_domain::{FallbackTexts, UserText};

/// Errors that can occur while exchanging one message with the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Server returned status {status}")]
    Server { status: u16, reason: Option<String> },

    /// The server answered successfully but the body had no readable reply
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Text rendered to the user in place of a reply.
    ///
    /// A reason supplied by the server wins; otherwise a fallback applies.
    pub fn user_facing_text(&self, texts: &FallbackTexts) -> String {
        match self {
            GatewayError::Server {
                reason: Some(reason),
                ..
            } if !reason.is_empty() => reason.clone(),
            GatewayError::Server { .. } | GatewayError::Transport(_) => {
                texts.generic().to_string()
            }
            GatewayError::MalformedResponse(_) => texts.server_error().to_string(),
        }
    }
}

/// Gateway to the chat backend
///
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one outbound request; implementations must not retry.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send the user's text and return the server's reply
    async fn send(&self, text: &UserText) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reason_preferred() {
        let err = GatewayError::Server {
            status: 503,
            reason: Some("server busy".to_string()),
        };
        assert_eq!(err.user_facing_text(&FallbackTexts::default()), "server busy");
    }

    #[test]
    fn test_server_without_reason_uses_generic() {
        let texts = FallbackTexts::default();
        let err = GatewayError::Server {
            status: 500,
            reason: None,
        };
        assert_eq!(err.user_facing_text(&texts), texts.generic());

        let empty = GatewayError::Server {
            status: 500,
            reason: Some(String::new()),
        };
        assert_eq!(empty.user_facing_text(&texts), texts.generic());
    }

    #[test]
    fn test_transport_uses_generic() {
        let texts = FallbackTexts::default();
        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.user_facing_text(&texts), texts.generic());
    }

    #[test]
    fn test_malformed_uses_server_error() {
        let texts = FallbackTexts::default();
        let err = GatewayError::MalformedResponse("missing reply".to_string());
        assert_eq!(err.user_facing_text(&texts), texts.server_error());
    }
}
