//! User-facing texts shown when no reply can be obtained

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Shown when the server answered with a success status but no readable reply
pub const SERVER_ERROR_MESSAGE: &str = "Erro na comunicação com o servidor.";

/// The two people the user is told to contact when the assistant fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationContacts {
    first: String,
    second: String,
}

impl EscalationContacts {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, DomainError> {
        let first = first.into().trim().to_string();
        let second = second.into().trim().to_string();
        for name in [&first, &second] {
            if name.is_empty() {
                return Err(DomainError::InvalidContact(
                    "contact name cannot be blank".to_string(),
                ));
            }
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl Default for EscalationContacts {
    fn default() -> Self {
        Self {
            first: "Miriam".to_string(),
            second: "Irineu".to_string(),
        }
    }
}

/// Texts used for terminal messages when the turn fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTexts {
    generic: String,
    server_error: String,
}

impl FallbackTexts {
    pub fn new(contacts: &EscalationContacts) -> Self {
        Self {
            generic: format!(
                "Desculpe, ocorreu um erro ao processar sua mensagem. \
                 Por favor, tente novamente mais tarde ou entre em contato com {} ou {}.",
                contacts.first(),
                contacts.second()
            ),
            server_error: SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    /// Generic fallback naming the escalation contacts
    pub fn generic(&self) -> &str {
        &self.generic
    }

    /// Fallback for responses that could not be understood
    pub fn server_error(&self) -> &str {
        &self.server_error
    }
}

impl Default for FallbackTexts {
    fn default() -> Self {
        Self::new(&EscalationContacts::default())
    }
}
