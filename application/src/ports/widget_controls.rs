//! Widget control ports
//!
//! The three UI controls the widget controller drives. Front-ends implement
//! them and inject them at construction; the controller never looks them up.

use std::sync::Arc;
use zar_domain::{ElementId, Message};

/// The text field the user types into
pub trait InputControl: Send + Sync {
    /// Current raw value (untrimmed)
    fn value(&self) -> String;

    fn clear(&self);

    fn set_enabled(&self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// Move keyboard focus to this field
    fn focus(&self);
}

/// The control that triggers a submission (button)
pub trait SubmitControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);

    fn set_label(&self, label: &str);
}

/// The scrolling list of rendered messages
pub trait MessageContainer: Send + Sync {
    /// Append an element at the end and return a handle to it
    fn append(&self, message: Message) -> ElementId;

    /// Remove exactly the element with this handle. Unknown handles are ignored.
    fn remove(&self, id: ElementId);

    fn scroll_to_bottom(&self);
}

/// The set of controls injected into the controller
#[derive(Clone)]
pub struct WidgetControls {
    pub input: Arc<dyn InputControl>,
    pub submit: Arc<dyn SubmitControl>,
    pub container: Arc<dyn MessageContainer>,
}

impl WidgetControls {
    pub fn new(
        input: Arc<dyn InputControl>,
        submit: Arc<dyn SubmitControl>,
        container: Arc<dyn MessageContainer>,
    ) -> Self {
        Self {
            input,
            submit,
            container,
        }
    }
}
