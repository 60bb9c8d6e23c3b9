//! Presentation layer for zar-chat
//!
//! This crate contains the CLI definition, the terminal implementations of
//! the widget controls, console formatting and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod widget;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use widget::{TerminalContainer, TerminalInput, TerminalSubmit, TerminalWidget};
