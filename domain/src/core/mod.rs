//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string::truncate`] — UTF-8 safe truncation for notices and log previews

pub mod error;
pub mod string;
