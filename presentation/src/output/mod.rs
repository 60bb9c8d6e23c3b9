//! Output formatting for the terminal front-end

pub mod console;
