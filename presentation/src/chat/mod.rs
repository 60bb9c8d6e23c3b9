//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface driving the
//! widget controller.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
