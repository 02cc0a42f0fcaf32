//! Prompt domain
//!
//! Templates and rendering for the two model-facing prompts: the persona
//! system prompt and the moderator instruction prompt.

pub mod moderator;
pub mod persona;

pub use moderator::{MODERATOR_PROMPT, moderator_context};
pub use persona::render_persona_prompt;
