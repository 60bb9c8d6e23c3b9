//! Chat messages as they appear in the widget's container.

pub mod entities;

pub use entities::{ElementId, Message, Origin};
