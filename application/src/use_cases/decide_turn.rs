//! Decide Turn use case.
//!
//! Asks the moderator model which persona (if any) should act on the latest
//! user message. One structured gateway call per invocation; the JSON
//! response is validated strictly.
//!
//! Failures propagate as typed errors — the single caller
//! ([`TurnDispatcher`](super::handle_turn::TurnDispatcher)) decides whether
//! to substitute fallback content. This keeps the error policy consistent
//! with [`GenerateReplyUseCase`](super::generate_reply::GenerateReplyUseCase).

use crate::config::CompletionParams;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use boardroom_domain::prompt::moderator::{
    MODERATOR_HISTORY_WINDOW, MODERATOR_PROMPT, moderator_context,
};
use boardroom_domain::{
    BoardSession, DomainError, Message, OrchestrationDecision, parse_decision, truncate_history,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while obtaining a moderator decision.
#[derive(Error, Debug)]
pub enum DecideTurnError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid decision: {0}")]
    Decision(#[from] DomainError),
}

/// Use case for one moderator decision.
pub struct DecideTurnUseCase {
    gateway: Arc<dyn ChatGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DecideTurnUseCase {
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

    /// Ask the moderator which persona acts on `latest_message`.
    pub async fn execute(
        &self,
        session: &BoardSession,
        latest_message: &str,
        params: &CompletionParams,
    ) -> Result<OrchestrationDecision, DecideTurnError> {
        let history = session.transcript().history();
        let recent = truncate_history(&history, MODERATOR_HISTORY_WINDOW);
        let raised: Vec<_> = session.raised_hands().collect();

        let messages = [
            Message::system(MODERATOR_PROMPT),
            Message::user(moderator_context(
                session.context(),
                session.active_speaker(),
                &raised,
                recent,
                latest_message,
            )),
        ];

        debug!(model = %params.model, "Requesting moderator decision");
        let value = self.gateway.complete_json(&messages, params).await?;
        let decision = parse_decision(&value)?;

        info!(
            action = decision.action.as_wire_str(),
            persona = decision.persona_id.map(|id| id.as_str()).unwrap_or("-"),
            "Moderator decided"
        );

        self.conversation_logger.log(ConversationEvent::new(
            "decision",
            serde_json::json!({
                "action": decision.action.as_wire_str(),
                "personaId": decision.persona_id,
                "reasoning": decision.reasoning,
            }),
        ));

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boardroom_domain::{BoardContext, ChatRole, DecisionAction, PersonaId};
    use std::sync::Mutex;

    struct MockGateway {
        response: serde_json::Value,
        seen_messages: Mutex<Vec<Message>>,
    }

    impl MockGateway {
        fn new(response: serde_json::Value) -> Self {
            Self {
                response,
                seen_messages: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn complete(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<String, GatewayError> {
            unreachable!("decision flow only uses complete_json")
        }

        async fn complete_json(
            &self,
            messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<serde_json::Value, GatewayError> {
            *self.seen_messages.lock().unwrap() = messages.to_vec();
            Ok(self.response.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl ChatGateway for FailingGateway {
        async fn complete(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<String, GatewayError> {
            Err(GatewayError::Timeout)
        }

        async fn complete_json(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<serde_json::Value, GatewayError> {
            Err(GatewayError::Timeout)
        }
    }

    fn session_with_history() -> BoardSession {
        let mut session = BoardSession::new(BoardContext::new("Acme", "Retail", "Chile"));
        for i in 0..6 {
            session.transcript_mut().push_user(format!("mensaje {}", i));
        }
        session
    }

    #[tokio::test]
    async fn test_decision_is_parsed_from_gateway_json() {
        let gateway = Arc::new(MockGateway::new(serde_json::json!({
            "type": "AGENT_SPEAK",
            "agentId": "cfo",
            "reasoning": "Tema financiero."
        })));
        let use_case = DecideTurnUseCase::new(gateway.clone());

        let decision = use_case
            .execute(
                &session_with_history(),
                "Los márgenes cayeron",
                &CompletionParams::default(),
            )
            .await
            .unwrap();

        assert_eq!(decision.action, DecisionAction::AgentSpeak);
        assert_eq!(decision.persona_id, Some(PersonaId::Cfo));
    }

    #[tokio::test]
    async fn test_moderator_sees_bounded_history_and_context() {
        let gateway = Arc::new(MockGateway::new(serde_json::json!({"type": "YIELD"})));
        let use_case = DecideTurnUseCase::new(gateway.clone());

        use_case
            .execute(
                &session_with_history(),
                "último",
                &CompletionParams::default(),
            )
            .await
            .unwrap();

        let messages = gateway.seen_messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[0].content.contains("Moderador"));

        let blob = &messages[1].content;
        assert!(blob.contains("\"companyName\":\"Acme\""));
        assert!(blob.contains("Último Mensaje: último"));
        // Only the last 3 of the 6 history entries are included
        assert!(blob.contains("mensaje 5"));
        assert!(!blob.contains("mensaje 2"));
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let use_case = DecideTurnUseCase::new(Arc::new(FailingGateway));
        let result = use_case
            .execute(
                &BoardSession::default(),
                "hola",
                &CompletionParams::default(),
            )
            .await;
        assert!(matches!(
            result,
            Err(DecideTurnError::Gateway(GatewayError::Timeout))
        ));
    }

    #[tokio::test]
    async fn test_unknown_decision_type_propagates_as_error() {
        let gateway = Arc::new(MockGateway::new(serde_json::json!({
            "type": "AGENT_WHISPER",
            "agentId": "cfo"
        })));
        let use_case = DecideTurnUseCase::new(gateway);

        let result = use_case
            .execute(
                &BoardSession::default(),
                "hola",
                &CompletionParams::default(),
            )
            .await;
        assert!(matches!(result, Err(DecideTurnError::Decision(_))));
    }
}
