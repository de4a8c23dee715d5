//! String utilities for the domain layer.

/// Shorten text to at most `max_chars` characters for log lines.
///
/// Counts characters, not bytes, so Japanese transcriptions are cut at the
/// same visual length as ASCII ones. Appends `...` when text was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.char_indices();
    match chars.nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}
