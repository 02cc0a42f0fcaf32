//! User input sanitization and validation.
//!
//! Sanitization and validation are independent operations: callers invoke
//! both as needed, in either order.

pub mod sanitizer;
pub mod validation;

pub use sanitizer::{MAX_MESSAGE_LEN, sanitize};
pub use validation::{MAX_HISTORY_LEN, ValidationError, truncate_history, validate};
