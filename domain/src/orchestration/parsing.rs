//! Moderator response parsing.
//!
//! The moderator is instructed to return strict JSON shaped as
//! `{"type", "agentId", "content", "reasoning"}`. The external response is
//! an externally-produced contract, so it is validated strictly here:
//! unknown `type` values and unknown persona ids are rejected rather than
//! trusted. Pure domain logic — no I/O.

use super::decision::{DecisionAction, OrchestrationDecision};
use crate::core::error::DomainError;
use crate::persona::PersonaId;
use serde_json::Value;

/// Parse a moderator JSON payload into an [`OrchestrationDecision`].
///
/// # Errors
///
/// - [`DomainError::MalformedDecision`] when the payload is not an object
///   or lacks a string `type` field
/// - [`DomainError::UnknownDecisionType`] for a `type` outside the contract
/// - [`DomainError::UnknownPersona`] when `agentId` names nobody at the board
pub fn parse_decision(value: &Value) -> Result<OrchestrationDecision, DomainError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DomainError::MalformedDecision(format!("not an object: {}", value)))?;

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::MalformedDecision("missing \"type\" field".to_string()))?;

    let action = match kind {
        "AGENT_SPEAK" => DecisionAction::AgentSpeak,
        "HAND_RAISE" => DecisionAction::HandRaise,
        "YIELD" => DecisionAction::Yield,
        other => return Err(DomainError::UnknownDecisionType(other.to_string())),
    };

    let persona_id = match obj.get("agentId").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Some(id.parse::<PersonaId>()?),
        _ => None,
    };

    let content = obj
        .get("content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let reasoning = obj
        .get("reasoning")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(OrchestrationDecision {
        action,
        persona_id,
        content,
        reasoning,
    })
}
