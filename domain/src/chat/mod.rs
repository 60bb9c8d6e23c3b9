//! Chat exchange with the backend: wire types and user-facing fallbacks.

pub mod fallback;
pub mod wire;

pub use fallback::{EscalationContacts, FallbackTexts, SERVER_ERROR_MESSAGE};
pub use wire::{CHAT_PATH, ChatRequest, ChatResponse};
