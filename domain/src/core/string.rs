//! String utilities for the domain layer.

/// Marker appended to text that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Truncate a string to at most `max_chars` characters, appending
/// [`TRUNCATION_MARKER`] when anything was cut.
///
/// Counts Unicode scalar values, not bytes, so Cyrillic and CJK pages get
/// the same limit as ASCII ones. The marker is not counted.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &s[..end], TRUNCATION_MARKER),
        None => s.to_string(),
    }
}

/// Return the first `max_chars` characters of `s` without a marker.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Collapse every whitespace run (including newlines) into a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
