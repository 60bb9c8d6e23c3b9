//! Widget texts: labels and fallbacks used by the controller.
//!
//! [`WidgetConfig`] is resolved once at startup from the file config
//! (`[widget]` section) and handed to
//! [`ChatWidgetController`](crate::use_cases::submit_message::ChatWidgetController).

use serde::{Deserialize, Serialize};
use zar_domain::{EscalationContacts, FallbackTexts};

/// Labels shown on the submit control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLabels {
    /// Label while idle
    pub idle: String,
    /// Label while a request is in flight
    pub sending: String,
}

impl Default for SubmitLabels {
    fn default() -> Self {
        Self {
            idle: "Enviar".to_string(),
            sending: "Enviando...".to_string(),
        }
    }
}

/// Controller configuration.
#[derive(Debug, Clone, Default)]
pub struct WidgetConfig {
    pub labels: SubmitLabels,
    pub fallback: FallbackTexts,
}

impl WidgetConfig {
    pub fn new(labels: SubmitLabels, contacts: &EscalationContacts) -> Self {
        Self {
            labels,
            fallback: FallbackTexts::new(contacts),
        }
    }
}
