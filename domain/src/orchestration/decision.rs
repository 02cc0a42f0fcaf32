//! Orchestration decision value objects.

use crate::persona::PersonaId;

/// What the moderator decided should happen this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionAction {
    /// The named persona responds and becomes the active speaker
    AgentSpeak,
    /// The named persona wants to speak; queued for a later turn
    HandRaise,
    /// Nobody acts this turn
    Yield,
}

impl DecisionAction {
    /// The wire name used in the moderator's JSON contract
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            DecisionAction::AgentSpeak => "AGENT_SPEAK",
            DecisionAction::HandRaise => "HAND_RAISE",
            DecisionAction::Yield => "YIELD",
        }
    }
}

/// The structured outcome of one moderator call (Value Object)
///
/// Produced once per user turn and consumed immediately; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationDecision {
    pub action: DecisionAction,
    pub persona_id: Option<PersonaId>,
    pub content: Option<String>,
    pub reasoning: Option<String>,
}

impl OrchestrationDecision {
    pub fn agent_speak(persona_id: PersonaId) -> Self {
        Self {
            action: DecisionAction::AgentSpeak,
            persona_id: Some(persona_id),
            content: None,
            reasoning: None,
        }
    }

    pub fn hand_raise(persona_id: PersonaId) -> Self {
        Self {
            action: DecisionAction::HandRaise,
            persona_id: Some(persona_id),
            content: None,
            reasoning: None,
        }
    }

    pub fn yield_turn() -> Self {
        Self {
            action: DecisionAction::Yield,
            persona_id: None,
            content: None,
            reasoning: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    /// The decision substituted when the moderator call fails.
    ///
    /// The default persona speaks a fixed error notice; the real cause only
    /// reaches the diagnostic log.
    pub fn fallback() -> Self {
        Self::agent_speak(PersonaId::default_id()).with_content("Error en orquestación.")
    }
}
