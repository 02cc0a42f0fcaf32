//! Domain layer for boardroom
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Boardroom
//!
//! The user plays the CEO of a company and converses with a fixed board of
//! four simulated executives (CFO, CTO, CIO, CDO). A moderator model decides
//! per turn which executive acts:
//!
//! - **AgentSpeak**: the named executive responds and becomes the active speaker
//! - **HandRaise**: the named executive queues up for a later turn
//! - **Yield**: nobody acts this turn
//!
//! ## Session
//!
//! [`BoardSession`] owns the company profile, the set of executives present
//! at the table, the hand-raise queue, and the conversation transcript. It is
//! a caller-owned value — there is no global state.

pub mod conversation;
pub mod core;
pub mod input;
pub mod orchestration;
pub mod persona;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use conversation::{
    entities::{ChatRole, ConversationTurn, Message, Speaker, TurnId, TurnKind},
    transcript::Transcript,
};
pub use core::{error::DomainError, string::truncate};
pub use input::{
    sanitizer::{MAX_MESSAGE_LEN, sanitize},
    validation::{MAX_HISTORY_LEN, ValidationError, truncate_history, validate},
};
pub use orchestration::{
    decision::{DecisionAction, OrchestrationDecision},
    parsing::parse_decision,
};
pub use persona::{Persona, PersonaId};
pub use prompt::{
    moderator::{MODERATOR_PROMPT, moderator_context},
    persona::render_persona_prompt,
};
pub use session::{BoardContext, BoardSession};
