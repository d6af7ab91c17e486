//! Character-offset text utilities.
//!
//! Edit surfaces, layout and selection geometry all speak in character offsets.
//! These helpers convert those offsets into byte slices and sanitize text
//! before it enters a surface.

use std::borrow::Cow;

/// Number of characters (Unicode scalar values) in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the character at `char_idx`, clamped to `s.len()`.
///
/// ```
/// # use input_core::byte_index_for_char;
/// assert_eq!(byte_index_for_char("aé b", 2), 3);
/// assert_eq!(byte_index_for_char("ab", 10), 2);
/// ```
#[inline]
pub fn byte_index_for_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// The first `n` characters of `s` (all of `s` if it is shorter).
#[inline]
pub fn char_prefix(s: &str, n: usize) -> &str {
    &s[..byte_index_for_char(s, n)]
}

/// Characters `[start, end)` of `s`, with both ends clamped to the text.
#[inline]
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let a = byte_index_for_char(s, start);
    let b = byte_index_for_char(s, end.max(start));
    &s[a..b]
}

/// Filter text for single-line fields by removing CR and LF.
///
/// Returns a borrowed string if no newlines are present.
///
/// ```
/// # use input_core::filter_single_line;
/// assert_eq!(filter_single_line("hello"), "hello");
/// assert_eq!(filter_single_line("a\r\nb\nc"), "abc");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }

    let filtered: String = s.chars().filter(|&ch| ch != '\n' && ch != '\r').collect();
    Cow::Owned(filtered)
}

/// Normalize newlines for multi-line fields.
///
/// Converts CRLF and CR to LF. Returns a borrowed string if no CR is present.
///
/// ```
/// # use input_core::normalize_newlines;
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Keep only the characters a numeric field accepts while typing.
///
/// Digits, sign, decimal point and exponent marker pass; anything else is
/// dropped. Whether the result parses is decided later, at display time.
pub fn filter_numeric(s: &str) -> Cow<'_, str> {
    let accepted = |ch: char| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E');
    if s.chars().all(accepted) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&ch| accepted(ch)).collect())
}
