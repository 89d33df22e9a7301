//! Text utilities for the monitor summary.

/// Summarize a set of checked labels for the monitor surface.
///
/// Labels are joined with `", "` in sequence order. When `max_len` is
/// nonzero and the joined string runs past it, the text is cut down to
/// `max_len` characters total, ellipsis included. An empty label set
/// yields `empty_text` verbatim.
pub fn summarize<S: AsRef<str>>(labels: &[S], max_len: usize, empty_text: &str) -> String {
    if labels.is_empty() {
        return empty_text.to_string();
    }

    let joined = labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    if max_len > 0 && joined.chars().count() > max_len {
        truncate_with_ellipsis(&joined, max_len)
    } else {
        joined
    }
}

/// Truncate text to `max_len` characters, ellipsis included.
///
/// Counts `char`s rather than bytes so multi-byte labels cannot be split
/// inside a code point. Labels may still be cut mid-word.
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    let mut out: String = text.chars().take(max_len.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
