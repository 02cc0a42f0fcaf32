//! Interactive chat module
//!
//! Provides a readline-based interactive boardroom interface.

mod repl;

pub use repl::BoardRepl;
