//! Conversation domain entities

use crate::persona::PersonaId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message sent to the chat completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A message in a chat completion payload (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Persona(PersonaId),
}

/// Kind of conversation turn
///
/// System notices (welcome, summons, error notices) are shown to the user
/// but excluded from the history sent to the models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Normal,
    SystemNotice,
}

/// Identifier for a turn, unique and strictly increasing within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId(pub u64);

/// One appended unit of conversation content (Entity)
///
/// Turns are immutable once created and are never removed from the
/// transcript.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub id: TurnId,
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub kind: TurnKind,
}

impl ConversationTurn {
    pub fn is_notice(&self) -> bool {
        self.kind == TurnKind::SystemNotice
    }

    /// The persona that authored this turn, if any
    pub fn persona_id(&self) -> Option<PersonaId> {
        match self.speaker {
            Speaker::Persona(id) => Some(id),
            Speaker::User => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&ChatRole::System).unwrap(),
            "\"system\""
        );
    }

    #[test]
    fn test_message_constructors() {
        let m = Message::user("hola");
        assert_eq!(m.role, ChatRole::User);
        assert_eq!(m.content, "hola");
    }
}
