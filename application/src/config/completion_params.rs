//! Completion call parameters — gateway call control.
//!
//! [`CompletionParams`] groups the static knobs for a single chat completion
//! call. [`TurnParams`] bundles the two calls a turn can make (moderator
//! decision, persona reply) plus the history window. These are application
//! concerns, not domain policy.

use boardroom_domain::MAX_HISTORY_LEN;
use serde::{Deserialize, Serialize};

/// Default model for both call shapes
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Parameters for one chat completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output token bound.
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 200,
        }
    }
}

impl CompletionParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Per-turn parameter bundle consumed by the turn dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnParams {
    /// Parameters for the moderator decision call (lower temperature —
    /// the decision should be stable, not creative).
    pub decision: CompletionParams,
    /// Parameters for the persona reply call (conversational variability).
    pub reply: CompletionParams,
    /// Maximum history entries sent with a reply call.
    pub history_limit: usize,
}

impl Default for TurnParams {
    fn default() -> Self {
        Self {
            decision: CompletionParams::default()
                .with_temperature(0.5)
                .with_max_tokens(300),
            reply: CompletionParams::default(),
            history_limit: MAX_HISTORY_LEN,
        }
    }
}

impl TurnParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.decision.model = model.clone();
        self.reply.model = model;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
