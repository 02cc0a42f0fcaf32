//! Conversation turns and the session transcript.

pub mod entities;
pub mod transcript;

pub use entities::{ChatRole, ConversationTurn, Message, Speaker, TurnId, TurnKind};
pub use transcript::Transcript;
