//! HTTP adapter for the chat backend.
//!
//! [`HttpChatGateway`] implements the
//! [`ChatGateway`](zar_application::ChatGateway) port with a single
//! `POST /api/chat` per message.

pub mod error;
pub mod gateway;

pub use error::HttpGatewayError;
pub use gateway::{HttpChatGateway, chat_endpoint};
