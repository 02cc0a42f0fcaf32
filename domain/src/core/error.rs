//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Unknown decision type: {0}")]
    UnknownDecisionType(String),

    #[error("Malformed decision: {0}")]
    MalformedDecision(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_persona_display() {
        let error = DomainError::UnknownPersona("ceo".to_string());
        assert_eq!(error.to_string(), "Unknown persona: ceo");
    }

    #[test]
    fn test_unknown_decision_type_display() {
        let error = DomainError::UnknownDecisionType("AGENT_SHOUT".to_string());
        assert_eq!(error.to_string(), "Unknown decision type: AGENT_SHOUT");
    }
}
