//! Backend configuration from TOML (`[server]` section)

use super::validation::{ConfigIssue, ConfigIssueCode};
use crate::http::chat_endpoint;
use serde::{Deserialize, Serialize};

/// Default backend: the Flask app's development address
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL the chat path is joined onto
    pub endpoint: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl FileServerConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        match chat_endpoint(&self.endpoint) {
            Ok(_) => vec![],
            Err(e) => vec![ConfigIssue::error(
                ConfigIssueCode::InvalidEndpoint,
                format!("server.endpoint: {}", e),
            )],
        }
    }
}
