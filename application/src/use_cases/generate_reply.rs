//! Generate Reply use case.
//!
//! Produces one persona reply: rendered persona system prompt, bounded
//! history in chronological order, then the new user message. Gateway
//! failures propagate uncaught — the turn dispatcher converts them into a
//! user-visible notice.

use crate::config::CompletionParams;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use boardroom_domain::{
    BoardSession, Message, Persona, render_persona_prompt, truncate, truncate_history,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Reply returned when the service answers successfully but with an empty
/// payload. A payload-shape edge case, not a failure path.
pub const EMPTY_REPLY_APOLOGY: &str = "Lo siento, no pude generar una respuesta.";

/// Errors that can occur during reply generation.
#[derive(Error, Debug)]
pub enum GenerateReplyError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for generating one persona reply.
pub struct GenerateReplyUseCase {
    gateway: Arc<dyn ChatGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateReplyUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Generate `persona`'s reply to `user_message`.
    pub async fn execute(
        &self,
        persona: &Persona,
        session: &BoardSession,
        user_message: &str,
        params: &CompletionParams,
        history_limit: usize,
    ) -> Result<String, GenerateReplyError> {
        let system_prompt = render_persona_prompt(persona, session.context());
        let history = session.transcript().history();
        let bounded = truncate_history(&history, history_limit);

        let mut messages = Vec::with_capacity(bounded.len() + 2);
        messages.push(Message::system(system_prompt));
        messages.extend_from_slice(bounded);
        messages.push(Message::user(user_message));

        debug!(persona = persona.id.as_str(), model = %params.model, "Requesting persona reply");
        let text = self.gateway.complete(&messages, params).await?;

        let reply = if text.trim().is_empty() {
            EMPTY_REPLY_APOLOGY.to_string()
        } else {
            text
        };

        self.conversation_logger.log(ConversationEvent::new(
            "persona_reply",
            serde_json::json!({
                "personaId": persona.id,
                "model": params.model,
                "preview": truncate(&reply, 100),
            }),
        ));

        Ok(reply)
    }
}
