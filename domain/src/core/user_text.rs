//! User text value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text typed by the user, trimmed and guaranteed non-empty (Value Object)
///
/// Blank input never becomes a `UserText`, so anything holding one is
/// allowed to produce a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserText {
    content: String,
}

impl UserText {
    /// Trim the input and wrap it, returning None if nothing is left
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the trimmed content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for UserText {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(DomainError::EmptyMessage)
    }
}

impl TryFrom<&str> for UserText {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(DomainError::EmptyMessage)
    }
}

impl From<UserText> for String {
    fn from(text: UserText) -> Self {
        text.content
    }
}
