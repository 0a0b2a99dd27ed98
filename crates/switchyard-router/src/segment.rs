//! Span scanning for placeholders
//!
//! The same functions delimit a placeholder's *name* when a pattern is
//! inserted and its *value* when a request path is matched, so both sides
//! always agree on where a placeholder ends.

/// Length in bytes of the longest prefix of `remaining` without `/` or `.`
///
/// Delimits `:name` placeholders.
pub fn named_span(remaining: &str) -> usize {
    remaining
        .bytes()
        .position(|b| b == b'/' || b == b'.')
        .unwrap_or(remaining.len())
}

/// Length in bytes of the longest prefix of `remaining` without `/`
///
/// Delimits `#name` placeholders, which treat `.` as ordinary text.
pub fn relaxed_span(remaining: &str) -> usize {
    remaining
        .bytes()
        .position(|b| b == b'/')
        .unwrap_or(remaining.len())
}

/// Split off the first `chars` characters of `path`
///
/// Returns `None` when `path` is shorter than `chars` characters.
pub(crate) fn split_chars(path: &str, chars: usize) -> Option<(&str, &str)> {
    let at = path
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(path.len()))
        .nth(chars)?;
    Some(path.split_at(at))
}
