//! The fixed board of executive personas.

pub mod entities;

pub use entities::{Persona, PersonaId};
