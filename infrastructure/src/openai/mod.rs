//! OpenAI-compatible chat completion adapter.
//!
//! Implements the [`ChatGateway`](boardroom_application::ChatGateway) port
//! against any `/v1/chat/completions` endpoint.

mod classify;
mod gateway;
mod types;

pub use classify::classify_failure;
pub use gateway::OpenAiChatGateway;
