//! Presentation layer for boardroom
//!
//! This crate contains CLI definitions, output formatters,
//! the deliberation spinner, and the interactive boardroom REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::BoardRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DeliberationSpinner;
