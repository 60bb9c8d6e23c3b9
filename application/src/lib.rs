//! Application layer for zar-chat
//!
//! This crate contains the widget controller use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{SubmitLabels, WidgetConfig};
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError},
    widget_controls::{InputControl, MessageContainer, SubmitControl, WidgetControls},
};
pub use use_cases::submit_message::{ChatWidgetController, SubmitOutcome};
