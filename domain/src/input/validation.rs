//! Pre-send validation and history bounding.

use super::sanitizer::MAX_MESSAGE_LEN;
use crate::conversation::entities::Message;
use thiserror::Error;

/// Maximum history entries sent to the models, to bound token cost
pub const MAX_HISTORY_LEN: usize = 20;

/// Why a message was rejected before sending.
///
/// Display strings are user-facing and localized.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El mensaje no puede estar vacío")]
    Empty,

    #[error("El mensaje no puede exceder {0} caracteres")]
    TooLong(usize),
}

/// Validate a message before it is sent to the models.
///
/// Independent of [`sanitize`](super::sanitizer::sanitize) — callers invoke
/// both as needed.
pub fn validate(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong(MAX_MESSAGE_LEN));
    }
    Ok(())
}

/// Keep only the most recent `max_len` history entries, preserving order.
///
/// A pure recency window: oldest entries are dropped without summarization.
/// No-op when the history is already within the bound.
pub fn truncate_history(history: &[Message], max_len: usize) -> &[Message] {
    &history[history.len().saturating_sub(max_len)..]
}
