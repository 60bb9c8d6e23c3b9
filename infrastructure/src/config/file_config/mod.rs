//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod output;
mod server;
mod validation;
mod widget;

pub use output::FileOutputConfig;
pub use server::{DEFAULT_ENDPOINT, FileServerConfig};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use widget::FileWidgetConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat backend settings
    pub server: FileServerConfig,
    /// Widget labels and fallback contacts
    pub widget: FileWidgetConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.server.validate());
        issues.extend(self.widget.parse_contacts().1);
        issues.extend(self.widget.parse_labels().1);

        issues
    }

    /// Apply command-line flags, which take precedence over every other source
    pub fn apply_overrides(&mut self, endpoint: Option<&str>, no_color: bool) {
        if let Some(endpoint) = endpoint {
            self.server.endpoint = endpoint.to_string();
        }
        if no_color {
            self.output.color = false;
        }
    }
}
