//! Chat gateway port
//!
//! Defines the interface for the external text-generation service. Two call
//! shapes exist: a free-text completion and a structured (JSON mode)
//! completion used for moderator decisions.

use crate::config::CompletionParams;
use async_trait::async_trait;
use boardroom_domain::Message;
use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// Variants mirror how provider failures are classified from their message
/// text: best-effort keyword matching, not structured error codes.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Failed to parse provider response: {0}")]
    Parsing(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl GatewayError {
    /// Localized, generic notice for the user.
    ///
    /// Raw error detail never reaches the transcript; it only goes to the
    /// diagnostic log.
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::Network(_) => {
                "Error de conexión. Por favor, verifica tu conexión a internet."
            }
            GatewayError::RateLimit(_) => {
                "Demasiadas solicitudes. Por favor, espera un momento."
            }
            GatewayError::InvalidCredential(_) => {
                "Error de autenticación con el servicio de IA."
            }
            GatewayError::Parsing(_) => "Error al procesar la respuesta de IA.",
            GatewayError::Timeout => {
                "La solicitud tardó demasiado. Por favor, intenta de nuevo."
            }
            GatewayError::Unknown(_) => {
                "Ocurrió un error inesperado. Por favor, intenta de nuevo."
            }
        }
    }
}

/// Gateway to the external chat completion service.
///
/// This port defines how the application layer talks to the provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Free-text completion: returns the assistant message content.
    ///
    /// An empty string is a valid result (successful call, empty payload) —
    /// callers decide what to substitute.
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, GatewayError>;

    /// Structured completion: the provider is asked for a JSON object and
    /// the parsed value is returned. A payload that is not valid JSON is a
    /// [`GatewayError::Parsing`].
    async fn complete_json(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<serde_json::Value, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_localized_and_generic() {
        let errors = [
            GatewayError::Network("connection refused".into()),
            GatewayError::RateLimit("429".into()),
            GatewayError::InvalidCredential("401".into()),
            GatewayError::Parsing("bad json".into()),
            GatewayError::Timeout,
            GatewayError::Unknown("boom".into()),
        ];
        for error in errors {
            let msg = error.user_message();
            assert!(!msg.is_empty());
            // Raw detail must not leak into the user notice
            assert!(!msg.contains("429"));
            assert!(!msg.contains("boom"));
        }
    }
}
