//! Session domain entities

use crate::conversation::transcript::Transcript;
use crate::persona::PersonaId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Company profile for the session (Value Object)
///
/// Serializes with camelCase keys — this is the exact context blob the
/// moderator model receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardContext {
    pub company_name: String,
    pub industry: String,
    pub country: String,
    pub goals: Vec<String>,
    pub documents: Vec<String>,
}

impl BoardContext {
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            country: country.into(),
            goals: Vec::new(),
            documents: Vec::new(),
        }
    }
}

/// Per-session mutable state (Entity)
///
/// Owned by the caller and passed `&mut` into the turn dispatcher; there is
/// no shared global store. Lifetime = user session, no persistence.
#[derive(Debug, Default)]
pub struct BoardSession {
    context: BoardContext,
    active_speaker: Option<PersonaId>,
    present: Vec<PersonaId>,
    hand_queue: VecDeque<PersonaId>,
    transcript: Transcript,
}

impl BoardSession {
    pub fn new(context: BoardContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    // ==================== Getters ====================

    pub fn context(&self) -> &BoardContext {
        &self.context
    }

    pub fn active_speaker(&self) -> Option<PersonaId> {
        self.active_speaker
    }

    /// Executives at the table, in arrival order
    pub fn present(&self) -> &[PersonaId] {
        &self.present
    }

    pub fn is_present(&self, id: PersonaId) -> bool {
        self.present.contains(&id)
    }

    /// Personas waiting for the floor, in raise order
    pub fn raised_hands(&self) -> impl Iterator<Item = PersonaId> + '_ {
        self.hand_queue.iter().copied()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    // ==================== Mutators ====================

    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.context.company_name = name.into();
    }

    pub fn set_industry(&mut self, industry: impl Into<String>) {
        self.context.industry = industry.into();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.context.country = country.into();
    }

    pub fn add_goal(&mut self, goal: impl Into<String>) {
        self.context.goals.push(goal.into());
    }

    pub fn add_document(&mut self, doc: impl Into<String>) {
        self.context.documents.push(doc.into());
    }

    pub fn set_active_speaker(&mut self, id: Option<PersonaId>) {
        self.active_speaker = id;
    }

    /// Seat an executive at the table. Idempotent.
    ///
    /// Returns `true` if the executive was newly seated.
    pub fn add_executive(&mut self, id: PersonaId) -> bool {
        if self.present.contains(&id) {
            return false;
        }
        self.present.push(id);
        true
    }

    pub fn remove_executive(&mut self, id: PersonaId) {
        self.present.retain(|p| *p != id);
        if self.active_speaker == Some(id) {
            self.active_speaker = None;
        }
    }

    /// Queue a persona for a later turn. Idempotent.
    ///
    /// Returns `true` if the persona was newly queued.
    pub fn raise_hand(&mut self, id: PersonaId) -> bool {
        if self.hand_queue.contains(&id) {
            return false;
        }
        self.hand_queue.push_back(id);
        true
    }

    /// Dequeue the persona who has waited longest, if any
    pub fn take_raised_hand(&mut self) -> Option<PersonaId> {
        self.hand_queue.pop_front()
    }

    /// Restore all fields to their empty defaults, including the transcript
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
