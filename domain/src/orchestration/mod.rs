//! Turn orchestration domain
//!
//! The moderator model produces one decision per user turn; this module
//! contains the decision value objects and the strict parser for the
//! moderator's JSON output.

pub mod decision;
pub mod parsing;

pub use decision::{DecisionAction, OrchestrationDecision};
pub use parsing::parse_decision;
