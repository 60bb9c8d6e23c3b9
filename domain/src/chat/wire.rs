//! Request/response bodies for `POST /api/chat`

use crate::core::user_text::UserText;
use serde::{Deserialize, Serialize};

/// Path of the single chat endpoint, relative to the backend base URL
pub const CHAT_PATH: &str = "/api/chat";

/// Outbound body: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(text: &UserText) -> Self {
        Self {
            message: text.content().to_string(),
        }
    }
}

/// Inbound body: `{"reply": "..."}`
///
/// The same shape is used for successful replies and for error reasons
/// attached to non-success statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatResponse {
    /// Parse a body, returning None if it is not a JSON object of this shape
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Reply text usable as an error reason (present and non-empty)
    pub fn reason(&self) -> Option<&str> {
        self.reply.as_deref().filter(|r| !r.is_empty())
    }
}
