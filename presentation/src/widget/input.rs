//! Input field backed by the line editor

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;
use zar_application::InputControl;

/// Holds the line most recently read by the REPL
#[derive(Debug)]
pub struct TerminalInput {
    value: Mutex<String>,
    enabled: AtomicBool,
    focused: AtomicBool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(String::new()),
            enabled: AtomicBool::new(true),
            focused: AtomicBool::new(false),
        }
    }

    /// Store a line typed by the user
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = value.into();
        }
    }

    /// Whether focus was returned since the last call; resets the flag
    pub fn take_focus(&self) -> bool {
        self.focused.swap(false, Ordering::AcqRel)
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputControl for TerminalInput {
    fn value(&self) -> String {
        self.value.lock().map(|v| v.clone()).unwrap_or_default()
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.value.lock() {
            guard.clear();
        }
    }

    fn set_enabled(&self, enabled: bool) {
        trace!("input enabled = {}", enabled);
        self.enabled.store(enabled, Ordering::Release);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn focus(&self) {
        self.focused.store(true, Ordering::Release);
    }
}
