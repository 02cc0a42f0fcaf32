//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`CompletionParams`] — model, temperature and output bound for one call
//! - [`TurnParams`] — the per-turn bundle: decision call, reply call, history window

pub mod completion_params;

pub use completion_params::{CompletionParams, TurnParams};
