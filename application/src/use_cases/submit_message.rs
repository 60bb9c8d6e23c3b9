//! Submit Message use case
//!
//! The chat widget controller: takes user input, renders it, relays it to the
//! backend through [`ChatGateway`] and renders the terminal message.

use crate::config::WidgetConfig;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::widget_controls::WidgetControls;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};
use zar_domain::{ElementId, Message, UserText};

/// What happened to one call to [`ChatWidgetController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing rendered or sent
    Ignored,
    /// Another submission is still in flight, nothing rendered or sent
    Busy,
    /// The server replied and the reply was rendered
    Replied(String),
    /// The turn failed and `shown` was rendered instead of a reply
    Failed { error: GatewayError, shown: String },
}

impl SubmitOutcome {
    /// Text of the terminal bot message, if one was rendered
    pub fn terminal_text(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Replied(reply) => Some(reply),
            SubmitOutcome::Failed { shown, .. } => Some(shown),
            SubmitOutcome::Ignored | SubmitOutcome::Busy => None,
        }
    }
}

/// One in-flight submission.
///
/// Dropping it restores the widget: the typing placeholder (if still shown) is
/// removed, the controls are re-enabled with the idle label, the input is
/// focused and the in-flight flag is cleared. This also runs when the submit
/// future is dropped before the backend answers.
struct Submission<'a, G: ChatGateway + 'static> {
    controller: &'a ChatWidgetController<G>,
    placeholder: Option<ElementId>,
}

impl<G: ChatGateway + 'static> Drop for Submission<'_, G> {
    fn drop(&mut self) {
        let controller = self.controller;
        if let Some(id) = self.placeholder.take() {
            controller.controls.container.remove(id);
        }
        controller.set_controls_enabled(true);
        controller.controls.input.focus();
        controller.in_flight.store(false, Ordering::Release);
    }
}

/// Controller for the chat widget
///
/// Owns no UI itself: the input, submit and container controls are injected.
/// At most one submission is in flight at a time; the controls are disabled
/// for its duration and the controller refuses overlapping calls.
pub struct ChatWidgetController<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    controls: WidgetControls,
    config: WidgetConfig,
    in_flight: AtomicBool,
}

impl<G: ChatGateway + 'static> ChatWidgetController<G> {
    pub fn new(gateway: Arc<G>, controls: WidgetControls) -> Self {
        Self {
            gateway,
            controls,
            config: WidgetConfig::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Called once the front-end is ready
    pub fn initialize(&self) {
        self.controls.submit.set_label(&self.config.labels.idle);
        self.controls.input.focus();
    }

    /// Whether a submission is currently waiting on the backend
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Append a message to the container and scroll to it
    pub fn render(&self, message: Message) -> ElementId {
        let id = self.controls.container.append(message);
        self.controls.container.scroll_to_bottom();
        id
    }

    /// Append a typing placeholder; the returned handle removes exactly it
    pub fn show_typing_placeholder(&self) -> ElementId {
        self.render(Message::typing_placeholder())
    }

    /// Submit whatever is currently in the input control (click / Enter)
    pub async fn submit_from_input(&self) -> SubmitOutcome {
        let value = self.controls.input.value();
        self.submit(&value).await
    }

    /// Run one conversation turn for `text`
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let Some(text) = UserText::try_new(text) else {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Submission rejected: another request is in flight");
            return SubmitOutcome::Busy;
        }
        let mut submission = Submission {
            controller: self,
            placeholder: None,
        };

        self.set_controls_enabled(false);

        self.render(Message::user(text.content()));
        self.controls.input.clear();

        submission.placeholder = Some(self.show_typing_placeholder());

        info!("Sending message ({} chars)", text.content().chars().count());
        let result = self.gateway.send(&text).await;

        if let Some(placeholder) = submission.placeholder.take() {
            self.controls.container.remove(placeholder);
        }

        let outcome = match result {
            Ok(reply) => {
                debug!("Received reply ({} chars)", reply.chars().count());
                self.render(Message::bot(reply.as_str()));
                SubmitOutcome::Replied(reply)
            }
            Err(error) => {
                warn!("Chat request failed: {}", error);
                let shown = error.user_facing_text(&self.config.fallback);
                self.render(Message::bot(shown.as_str()));
                SubmitOutcome::Failed { error, shown }
            }
        };

        drop(submission);
        outcome
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls.input.set_enabled(enabled);
        self.controls.submit.set_enabled(enabled);
        let label = if enabled {
            &self.config.labels.idle
        } else {
            &self.config.labels.sending
        };
        self.controls.submit.set_label(label);
    }
}
