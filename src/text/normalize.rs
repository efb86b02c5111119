//! Sentence-aware truncation of long input text.

use once_cell::sync::Lazy;
use regex::Regex;

/// `.`, `!` or `?` followed by whitespace or the end of the text.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](?:\s|$)").expect("sentence terminator pattern is valid"));

/// Shortens `text` to roughly `max_chars` characters.
///
/// Text within budget is returned as is. Otherwise the cut lands after the
/// last sentence terminator ending within `max_chars + search_range`
/// characters, so the result may run slightly past `max_chars`. With no
/// terminator in that window the text is hard-cut at `max_chars`.
///
/// The result is always a prefix of `text`, and truncating it again with the
/// same arguments returns it unchanged.
pub fn truncate_at_sentence(text: &str, max_chars: usize, search_range: usize) -> &str {
    if text.chars().count() <= max_chars {
        return text;
    }

    let window_end = byte_offset(text, max_chars + search_range);
    let boundary = SENTENCE_END
        .find_iter(text)
        .map(|m| m.start() + 1)
        .take_while(|&end| end <= window_end)
        .last();

    match boundary {
        Some(end) => text[..end].trim_end(),
        None => &text[..byte_offset(text, max_chars)],
    }
}

/// Byte index of the `chars`-th character, or the text length when shorter.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
