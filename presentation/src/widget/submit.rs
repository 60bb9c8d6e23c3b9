//! Submit control shown as the REPL prompt

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use zar_application::{SubmitControl, SubmitLabels};

#[derive(Debug)]
pub struct TerminalSubmit {
    enabled: AtomicBool,
    label: Mutex<String>,
}

impl TerminalSubmit {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            label: Mutex::new(SubmitLabels::default().idle),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn label(&self) -> String {
        self.label.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Prompt for the line editor, e.g. `[Enviar]> `
    pub fn prompt(&self) -> String {
        format!("[{}]> ", self.label())
    }
}

impl Default for TerminalSubmit {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitControl for TerminalSubmit {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    fn set_label(&self, label: &str) {
        if let Ok(mut guard) = self.label.lock() {
            *guard = label.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_follows_label() {
        let submit = TerminalSubmit::new();
        assert_eq!(submit.prompt(), "[Enviar]> ");
        submit.set_label("Send");
        assert_eq!(submit.prompt(), "[Send]> ");
    }
}
