//! Handle Turn use case — the caller-side orchestration glue.
//!
//! One user turn runs at most two sequential gateway calls: the moderator
//! decision, then (for `AgentSpeak` without inline content) the persona
//! reply. Overlapping submissions are rejected by a boolean busy latch —
//! a latch, not a queue: a second submission while busy is refused, never
//! deferred.
//!
//! Error policy: moderator failures are converted here into the fixed
//! fallback decision; reply failures are converted into a localized system
//! notice. The dispatcher itself only fails on invalid input or when busy.

use crate::config::TurnParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::decide_turn::DecideTurnUseCase;
use crate::use_cases::generate_reply::{GenerateReplyError, GenerateReplyUseCase};
use boardroom_domain::{
    BoardSession, ConversationTurn, DecisionAction, OrchestrationDecision, Persona, PersonaId,
    ValidationError, sanitize, truncate, validate,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a turn before any model is called.
#[derive(Error, Debug)]
pub enum TurnError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("Ya hay un turno en curso")]
    Busy,
}

/// What one dispatched turn did to the session.
#[derive(Debug)]
pub struct TurnOutcome {
    /// The decision that drove this turn (possibly the fallback).
    pub decision: OrchestrationDecision,
    /// Persona newly seated at the table this turn, if any.
    pub summoned: Option<PersonaId>,
    /// Every turn appended during this dispatch, user turn first.
    pub appended: Vec<ConversationTurn>,
}

/// Dispatches one user turn against a caller-owned [`BoardSession`].
pub struct TurnDispatcher {
    decide: DecideTurnUseCase,
    reply: GenerateReplyUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: TurnParams,
    busy: AtomicBool,
}

impl TurnDispatcher {
    pub fn new(
        decide: DecideTurnUseCase,
        reply: GenerateReplyUseCase,
        params: TurnParams,
    ) -> Self {
        Self {
            decide,
            reply,
            conversation_logger: Arc::new(NoConversationLogger),
            params,
            busy: AtomicBool::new(false),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Whether a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Run one full user turn.
    pub async fn dispatch(
        &self,
        session: &mut BoardSession,
        raw_text: &str,
    ) -> Result<TurnOutcome, TurnError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(TurnError::Busy);
        }
        let result = self.run(session, raw_text).await;
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    async fn run(
        &self,
        session: &mut BoardSession,
        raw_text: &str,
    ) -> Result<TurnOutcome, TurnError> {
        validate(raw_text)?;
        let clean = sanitize(raw_text);

        let mark = session.transcript().len();
        session.transcript_mut().push_user(clean.clone());
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({ "text": clean }),
        ));

        // One raised hand is drained per cycle before the moderator is
        // consulted again.
        let decision = match session.take_raised_hand() {
            Some(id) => {
                info!(persona = id.as_str(), "Granting the floor to a raised hand");
                OrchestrationDecision::agent_speak(id).with_reasoning("Tenía la mano alzada.")
            }
            None => match self.decide.execute(session, &clean, &self.params.decision).await {
                Ok(decision) => decision,
                Err(e) => {
                    warn!("Orchestration failed, using fallback decision: {e}");
                    OrchestrationDecision::fallback()
                }
            },
        };

        let mut summoned = None;
        match decision.action {
            DecisionAction::AgentSpeak => {
                if let Some(id) = decision.persona_id {
                    summoned = self.seat_and_speak(session, id, &decision, &clean).await;
                }
            }
            DecisionAction::HandRaise => {
                if let Some(id) = decision.persona_id
                    && session.raise_hand(id)
                {
                    let persona = Persona::by_id(id);
                    session.transcript_mut().push_notice(format!(
                        "✋ {} ({}) pide la palabra.",
                        persona.display_name, persona.role
                    ));
                }
            }
            DecisionAction::Yield => {}
        }

        let appended = session.transcript().turns()[mark..].to_vec();
        Ok(TurnOutcome {
            decision,
            summoned,
            appended,
        })
    }

    /// Seat the persona if absent, make it the active speaker, and append
    /// its reply. Returns the persona id when it was newly seated.
    async fn seat_and_speak(
        &self,
        session: &mut BoardSession,
        id: PersonaId,
        decision: &OrchestrationDecision,
        user_message: &str,
    ) -> Option<PersonaId> {
        let persona = Persona::by_id(id);

        let newly_seated = session.add_executive(id);
        if newly_seated {
            session.transcript_mut().push_notice(format!(
                "📋 Convocando a {} ({}) - {}",
                persona.display_name,
                persona.role,
                truncate(persona.description, 60)
            ));
        }
        session.set_active_speaker(Some(id));

        // The fallback decision carries its content inline; the normal flow
        // always asks the reply use case.
        let text = match &decision.content {
            Some(content) => content.clone(),
            None => match self
                .reply
                .execute(persona, session, user_message, &self.params.reply, self.params.history_limit)
                .await
            {
                Ok(text) => text,
                Err(GenerateReplyError::Gateway(e)) => {
                    warn!("Reply generation failed: {e}");
                    self.conversation_logger.log(ConversationEvent::new(
                        "turn_error",
                        serde_json::json!({ "personaId": id, "error": e.to_string() }),
                    ));
                    session.transcript_mut().push_notice(e.user_message());
                    return newly_seated.then_some(id);
                }
            },
        };

        session.transcript_mut().push_persona(id, text);
        newly_seated.then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompletionParams;
    use crate::ports::chat_gateway::{ChatGateway, GatewayError};
    use async_trait::async_trait;
    use boardroom_domain::{BoardContext, Message, Speaker, TurnKind};

    /// Scripted gateway: one queued JSON decision, one queued text reply.
    struct ScriptedGateway {
        decision: Result<serde_json::Value, ()>,
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl ChatGateway for ScriptedGateway {
        async fn complete(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<String, GatewayError> {
            self.reply
                .clone()
                .map_err(|_| GatewayError::Network("connection refused".into()))
        }

        async fn complete_json(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<serde_json::Value, GatewayError> {
            self.decision
                .clone()
                .map_err(|_| GatewayError::Timeout)
        }
    }

    fn dispatcher(gateway: ScriptedGateway) -> TurnDispatcher {
        let gateway = Arc::new(gateway);
        TurnDispatcher::new(
            DecideTurnUseCase::new(gateway.clone()),
            GenerateReplyUseCase::new(gateway),
            TurnParams::default(),
        )
    }

    fn acme_session() -> BoardSession {
        BoardSession::new(BoardContext::new("Acme", "Retail", "Chile"))
    }

    #[tokio::test]
    async fn test_agent_speak_summons_and_replies() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "AGENT_SPEAK", "agentId": "cfo"})),
            reply: Ok("Los márgenes necesitan atención inmediata.".to_string()),
        });
        let mut session = acme_session();

        let outcome = dispatcher
            .dispatch(&mut session, "Our margins dropped this quarter")
            .await
            .unwrap();

        assert!(session.is_present(PersonaId::Cfo));
        assert_eq!(session.active_speaker(), Some(PersonaId::Cfo));
        assert_eq!(outcome.summoned, Some(PersonaId::Cfo));

        // user turn, summon notice, exactly one assistant turn — in order
        assert_eq!(outcome.appended.len(), 3);
        assert_eq!(outcome.appended[0].speaker, Speaker::User);
        assert_eq!(outcome.appended[1].kind, TurnKind::SystemNotice);
        assert!(outcome.appended[1].text.contains("Convocando a Victoria Chen"));
        assert_eq!(
            outcome.appended[2].speaker,
            Speaker::Persona(PersonaId::Cfo)
        );
        assert_eq!(
            outcome.appended[2].text,
            "Los márgenes necesitan atención inmediata."
        );
    }

    #[tokio::test]
    async fn test_present_persona_is_not_summoned_twice() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "AGENT_SPEAK", "agentId": "cfo"})),
            reply: Ok("Sigo aquí.".to_string()),
        });
        let mut session = acme_session();
        session.add_executive(PersonaId::Cfo);

        let outcome = dispatcher.dispatch(&mut session, "¿Algo más?").await.unwrap();

        assert_eq!(outcome.summoned, None);
        // user turn + reply, no summon notice
        assert_eq!(outcome.appended.len(), 2);
        assert_eq!(session.present(), &[PersonaId::Cfo]);
    }

    #[tokio::test]
    async fn test_orchestrator_failure_yields_literal_fallback() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Err(()),
            reply: Ok("nunca llamado".to_string()),
        });
        let mut session = acme_session();

        let outcome = dispatcher.dispatch(&mut session, "hola junta").await.unwrap();

        assert_eq!(outcome.decision, OrchestrationDecision::fallback());
        assert_eq!(outcome.decision.persona_id, Some(PersonaId::Cfo));
        assert_eq!(
            outcome.decision.content.as_deref(),
            Some("Error en orquestación.")
        );
        // The fallback content is spoken directly, no reply call
        let last = outcome.appended.last().unwrap();
        assert_eq!(last.text, "Error en orquestación.");
        assert_eq!(last.speaker, Speaker::Persona(PersonaId::Cfo));
    }

    #[tokio::test]
    async fn test_hand_raise_queues_and_drains_next_cycle() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "HAND_RAISE", "agentId": "cto"})),
            reply: Ok("Quería comentar la parte técnica.".to_string()),
        });
        let mut session = acme_session();

        let outcome = dispatcher.dispatch(&mut session, "Migremos todo a la nube").await.unwrap();
        assert_eq!(outcome.decision.action, DecisionAction::HandRaise);
        assert_eq!(session.raised_hands().collect::<Vec<_>>(), vec![PersonaId::Cto]);
        assert!(outcome.appended.iter().any(|t| t.text.contains("pide la palabra")));
        // Nobody spoke this cycle
        assert!(outcome.appended.iter().all(|t| t.persona_id().is_none()));

        // Next cycle: the queued hand gets the floor without a moderator call
        let outcome = dispatcher.dispatch(&mut session, "Continuemos").await.unwrap();
        assert_eq!(outcome.decision.action, DecisionAction::AgentSpeak);
        assert_eq!(outcome.decision.persona_id, Some(PersonaId::Cto));
        assert_eq!(session.active_speaker(), Some(PersonaId::Cto));
        assert_eq!(session.raised_hands().count(), 0);
        assert!(
            outcome
                .appended
                .iter()
                .any(|t| t.persona_id() == Some(PersonaId::Cto))
        );
    }

    #[tokio::test]
    async fn test_yield_leaves_session_unchanged() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "YIELD"})),
            reply: Ok("nunca llamado".to_string()),
        });
        let mut session = acme_session();

        let outcome = dispatcher.dispatch(&mut session, "Pensemos un momento").await.unwrap();

        assert_eq!(outcome.decision.action, DecisionAction::Yield);
        assert!(session.present().is_empty());
        assert_eq!(session.active_speaker(), None);
        // Only the user turn was appended
        assert_eq!(outcome.appended.len(), 1);
    }

    #[tokio::test]
    async fn test_reply_failure_becomes_localized_notice() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "AGENT_SPEAK", "agentId": "cio"})),
            reply: Err(()),
        });
        let mut session = acme_session();

        let outcome = dispatcher.dispatch(&mut session, "Revisemos los datos").await.unwrap();

        let last = outcome.appended.last().unwrap();
        assert_eq!(last.kind, TurnKind::SystemNotice);
        assert_eq!(
            last.text,
            "Error de conexión. Por favor, verifica tu conexión a internet."
        );
        // Raw detail never reaches the transcript
        assert!(!last.text.contains("connection refused"));
        // The persona was still seated and holds the floor
        assert!(session.is_present(PersonaId::Cio));
        assert_eq!(session.active_speaker(), Some(PersonaId::Cio));
    }

    #[tokio::test]
    async fn test_invalid_input_aborts_before_any_call() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "YIELD"})),
            reply: Ok("ok".to_string()),
        });
        let mut session = acme_session();

        assert!(matches!(
            dispatcher.dispatch(&mut session, "   ").await,
            Err(TurnError::Invalid(ValidationError::Empty))
        ));
        assert!(session.transcript().is_empty());

        let long = "x".repeat(600);
        assert!(matches!(
            dispatcher.dispatch(&mut session, &long).await,
            Err(TurnError::Invalid(ValidationError::TooLong(_)))
        ));
    }

    #[tokio::test]
    async fn test_busy_latch_reports_idle_after_dispatch() {
        let dispatcher = dispatcher(ScriptedGateway {
            decision: Ok(serde_json::json!({"type": "YIELD"})),
            reply: Ok("ok".to_string()),
        });
        let mut session = acme_session();

        assert!(!dispatcher.is_busy());
        dispatcher.dispatch(&mut session, "hola").await.unwrap();
        assert!(!dispatcher.is_busy());
    }
}
