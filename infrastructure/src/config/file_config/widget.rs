//! Widget configuration from TOML (`[widget]` section)

use super::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use zar_application::{SubmitLabels, WidgetConfig};
use zar_domain::EscalationContacts;

/// Raw widget configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWidgetConfig {
    /// The two people named in the generic fallback message
    pub contacts: Vec<String>,
    /// Submit label while idle
    pub send_label: String,
    /// Submit label while a request is in flight
    pub sending_label: String,
    /// Name shown in the typing indicator
    pub bot_name: String,
}

impl Default for FileWidgetConfig {
    fn default() -> Self {
        let contacts = EscalationContacts::default();
        let labels = SubmitLabels::default();
        Self {
            contacts: vec![contacts.first().to_string(), contacts.second().to_string()],
            send_label: labels.idle,
            sending_label: labels.sending,
            bot_name: "ZAR".to_string(),
        }
    }
}

impl FileWidgetConfig {
    /// Parse the contacts list, falling back to the defaults on any issue
    pub fn parse_contacts(&self) -> (EscalationContacts, Vec<ConfigIssue>) {
        if self.contacts.len() != 2 {
            return (
                EscalationContacts::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::ContactCount {
                        found: self.contacts.len(),
                    },
                    format!(
                        "widget.contacts: expected 2 names, found {}; using defaults",
                        self.contacts.len()
                    ),
                )],
            );
        }

        match EscalationContacts::new(&self.contacts[0], &self.contacts[1]) {
            Ok(contacts) => (contacts, vec![]),
            Err(e) => (
                EscalationContacts::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::BlankContact,
                    format!("widget.contacts: {}; using defaults", e),
                )],
            ),
        }
    }

    /// Submit labels, keeping the default for any blank label
    pub fn parse_labels(&self) -> (SubmitLabels, Vec<ConfigIssue>) {
        let defaults = SubmitLabels::default();
        let mut issues = Vec::new();

        let mut pick = |field: &str, value: &str, default: String| {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyLabel {
                        field: field.to_string(),
                    },
                    format!("widget.{}: label is blank; using '{}'", field, default),
                ));
                default
            } else {
                value.to_string()
            }
        };

        let labels = SubmitLabels {
            idle: pick("send_label", &self.send_label, defaults.idle),
            sending: pick("sending_label", &self.sending_label, defaults.sending),
        };
        (labels, issues)
    }

    /// Build the controller configuration
    pub fn to_widget_config(&self) -> WidgetConfig {
        let (contacts, _) = self.parse_contacts();
        let (labels, _) = self.parse_labels();
        WidgetConfig::new(labels, &contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contacts() {
        let (contacts, issues) = FileWidgetConfig::default().parse_contacts();
        assert!(issues.is_empty());
        assert_eq!(contacts, EscalationContacts::default());
    }

    #[test]
    fn test_wrong_contact_count_falls_back() {
        let config = FileWidgetConfig {
            contacts: vec!["Ana".to_string()],
            ..Default::default()
        };
        let (contacts, issues) = config.parse_contacts();
        assert_eq!(contacts, EscalationContacts::default());
        assert_eq!(issues[0].code, ConfigIssueCode::ContactCount { found: 1 });
    }

    #[test]
    fn test_blank_contact_falls_back() {
        let config = FileWidgetConfig {
            contacts: vec!["Ana".to_string(), " ".to_string()],
            ..Default::default()
        };
        let (_, issues) = config.parse_contacts();
        assert_eq!(issues[0].code, ConfigIssueCode::BlankContact);
    }

    #[test]
    fn test_blank_label_keeps_default() {
        let config = FileWidgetConfig {
            sending_label: String::new(),
            ..Default::default()
        };
        let (labels, issues) = config.parse_labels();
        assert_eq!(labels.sending, "Enviando...");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_to_widget_config() {
        let config = FileWidgetConfig {
            contacts: vec!["Ana".to_string(), "Bruno".to_string()],
            send_label: "Send".to_string(),
            sending_label: "Sending...".to_string(),
            bot_name: "ZAR".to_string(),
        };
        let widget = config.to_widget_config();
        assert_eq!(widget.labels.idle, "Send");
        assert!(widget.fallback.generic().contains("Ana ou Bruno"));
    }
}
