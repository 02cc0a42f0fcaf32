//! Application layer for boardroom
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CompletionParams, TurnParams};
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::decide_turn::{DecideTurnError, DecideTurnUseCase};
pub use use_cases::generate_reply::{GenerateReplyError, GenerateReplyUseCase};
pub use use_cases::handle_turn::{TurnDispatcher, TurnError, TurnOutcome};
