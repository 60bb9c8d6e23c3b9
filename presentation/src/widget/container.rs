//! Message container printing to the terminal scrollback

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};
use zar_application::MessageContainer;
use zar_domain::{ElementId, Message};

struct State {
    next_id: u64,
    elements: Vec<(ElementId, Message)>,
    spinners: HashMap<ElementId, ProgressBar>,
}

/// Prints each appended message; the typing placeholder is a spinner that
/// is cleared from the screen when removed.
pub struct TerminalContainer {
    bot_name: String,
    out: Mutex<Box<dyn Write + Send>>,
    state: Mutex<State>,
    show_spinner: bool,
}

impl TerminalContainer {
    pub fn new(bot_name: impl Into<String>, out: Box<dyn Write + Send>) -> Self {
        Self {
            bot_name: bot_name.into(),
            out: Mutex::new(out),
            state: Mutex::new(State {
                next_id: 0,
                elements: Vec::new(),
                spinners: HashMap::new(),
            }),
            show_spinner: true,
        }
    }

    pub fn stdout(bot_name: impl Into<String>) -> Self {
        Self::new(bot_name, Box::new(std::io::stdout()))
    }

    /// Disable the animated spinner (placeholders are still tracked)
    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    /// Messages currently in the container, in visual order
    pub fn messages(&self) -> Vec<Message> {
        self.state()
            .elements
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Element bookkeeping stays consistent after a panic, so a poisoned
    /// lock is recovered instead of dropping the operation.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Message container state lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn out(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_spinner {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(ConsoleFormatter::typing_text(&self.bot_name));
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }

    fn print(&self, message: &Message) {
        let text = ConsoleFormatter::format_message(message, &self.bot_name);
        if let Err(e) = writeln!(self.out(), "{}", text) {
            warn!("Failed to write message: {}", e);
        }
    }
}

impl MessageContainer for TerminalContainer {
    fn append(&self, message: Message) -> ElementId {
        let mut state = self.state();
        state.next_id += 1;
        let id = ElementId::new(state.next_id);

        if message.is_typing_placeholder() {
            state.spinners.insert(id, self.spinner());
        } else {
            self.print(&message);
        }
        debug!("appended {} ({})", id, message.origin());
        state.elements.push((id, message));
        id
    }

    fn remove(&self, id: ElementId) {
        let mut state = self.state();
        if let Some(spinner) = state.spinners.remove(&id) {
            spinner.finish_and_clear();
        }
        state.elements.retain(|(eid, _)| *eid != id);
    }

    fn scroll_to_bottom(&self) {
        // The scrollback follows the last line once it is flushed
        if let Err(e) = self.out().flush() {
            warn!("Failed to flush output: {}", e);
        }
    }
}
