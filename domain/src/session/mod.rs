//! Boardroom session domain.
//!
//! - [`entities::BoardContext`] — the company profile substituted into prompts
//! - [`entities::BoardSession`] — per-session mutable state: context, active
//!   speaker, executives present, hand-raise queue, transcript

pub mod entities;

pub use entities::{BoardContext, BoardSession};
