//! Application-level configuration.
//!
//! - [`WidgetConfig`] — submit labels and fallback texts for the widget controller

pub mod widget_config;

pub use widget_config::{SubmitLabels, WidgetConfig};
