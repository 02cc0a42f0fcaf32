//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut.
///
/// Counts characters, not bytes, so multi-byte text (the personas speak
/// Spanish) is never split mid-character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{}...", cut)
}
