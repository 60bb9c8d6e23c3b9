//! Domain layer for zar-chat
//!
//! This crate contains the entities and value objects of the chat widget.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Message**: a display string tagged with its [`Origin`] (user or bot).
//!   A typing placeholder is a transient bot message with no text.
//! - **Conversation turn**: one user message followed by exactly one
//!   terminal bot message, either the server's reply or a fallback text.

pub mod chat;
pub mod core;
pub mod message;

// Re-export commonly used types
pub use chat::{
    CHAT_PATH, ChatRequest, ChatResponse, EscalationContacts, FallbackTexts, SERVER_ERROR_MESSAGE,
};
pub use core::{error::DomainError, user_text::UserText};
pub use message::{ElementId, Message, Origin};
