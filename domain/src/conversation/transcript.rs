//! Append-only transcript of a boardroom session.
//!
//! The transcript owns turn id assignment: ids are unique and strictly
//! increasing in creation order, so transcript order is conversation order.

use super::entities::{ChatRole, ConversationTurn, Message, Speaker, TurnId, TurnKind};
use crate::persona::PersonaId;
use chrono::Utc;

/// Ordered sequence of conversation turns (Entity)
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent `n` turns in conversation order
    pub fn recent(&self, n: usize) -> &[ConversationTurn] {
        &self.turns[self.turns.len().saturating_sub(n)..]
    }

    /// Append a turn authored by the user
    pub fn push_user(&mut self, text: impl Into<String>) -> &ConversationTurn {
        self.push(Speaker::User, text.into(), TurnKind::Normal)
    }

    /// Append a turn authored by a persona
    pub fn push_persona(
        &mut self,
        id: PersonaId,
        text: impl Into<String>,
    ) -> &ConversationTurn {
        self.push(Speaker::Persona(id), text.into(), TurnKind::Normal)
    }

    /// Append a system notice (welcome, summon, error)
    ///
    /// Notices are attributed to the user side of the table but never enter
    /// the model-facing history.
    pub fn push_notice(&mut self, text: impl Into<String>) -> &ConversationTurn {
        self.push(Speaker::User, text.into(), TurnKind::SystemNotice)
    }

    fn push(&mut self, speaker: Speaker, text: String, kind: TurnKind) -> &ConversationTurn {
        let id = TurnId(self.next_id);
        self.next_id += 1;
        self.turns.push(ConversationTurn {
            id,
            speaker,
            text,
            created_at: Utc::now(),
            kind,
        });
        self.turns.last().unwrap()
    }

    /// Project the transcript into role-tagged chat messages.
    ///
    /// System notices are skipped; persona turns become assistant messages.
    pub fn history(&self) -> Vec<Message> {
        self.turns
            .iter()
            .filter(|t| !t.is_notice())
            .map(|t| match t.speaker {
                Speaker::User => Message::user(t.text.clone()),
                Speaker::Persona(_) => Message::assistant(t.text.clone()),
            })
            .collect()
    }
}
