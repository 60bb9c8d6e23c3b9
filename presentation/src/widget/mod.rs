//! Terminal implementations of the widget controls
//!
//! The line editor feeds [`TerminalInput`], [`TerminalSubmit`] tracks the
//! submit state shown in the prompt, and [`TerminalContainer`] prints
//! messages to the scrollback with a spinner as the typing placeholder.

mod container;
mod input;
mod submit;

pub use container::TerminalContainer;
pub use input::TerminalInput;
pub use submit::TerminalSubmit;

use std::sync::Arc;
use zar_application::{InputControl, MessageContainer, SubmitControl, WidgetControls};

/// The three terminal controls, kept together for wiring
pub struct TerminalWidget {
    pub input: Arc<TerminalInput>,
    pub submit: Arc<TerminalSubmit>,
    pub container: Arc<TerminalContainer>,
}

impl TerminalWidget {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self::with_container(TerminalContainer::stdout(bot_name))
    }

    pub fn with_container(container: TerminalContainer) -> Self {
        Self {
            input: Arc::new(TerminalInput::new()),
            submit: Arc::new(TerminalSubmit::new()),
            container: Arc::new(container),
        }
    }

    /// Handles to inject into the controller
    pub fn controls(&self) -> WidgetControls {
        WidgetControls::new(
            Arc::clone(&self.input) as Arc<dyn InputControl>,
            Arc::clone(&self.submit) as Arc<dyn SubmitControl>,
            Arc::clone(&self.container) as Arc<dyn MessageContainer>,
        )
    }
}
