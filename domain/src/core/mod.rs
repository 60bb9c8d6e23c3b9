//! Core domain concepts shared across all subdomains.
//!
//! - [`user_text::UserText`] — validated text submitted by the user
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod user_text;
