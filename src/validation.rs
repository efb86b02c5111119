//! Output Validation Module
//!
//! Decides whether a generated one-sentence fact is fit to return and cache.
//!
//! Checks run in order and stop at the first failure:
//! 1. strip whitespace and wrapping quotes
//! 2. reject empty output
//! 3. reject fewer than `min_words` or more than `max_words` words
//! 4. reject refusal phrases, then error/hedging phrases (case-insensitive)
//! 5. shorten anything over `max_chars` at a word boundary and append `...`

use thiserror::Error;

pub const DEFAULT_MIN_WORDS: usize = 5;
pub const DEFAULT_MAX_WORDS: usize = 40;
pub const DEFAULT_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

pub const DEFAULT_REFUSAL_PHRASES: &[&str] = &[
    "i cannot",
    "i can't",
    "i can not",
    "i'm unable",
    "i am unable",
    "i'm not able",
    "i am not able",
    "as an ai",
    "as a language model",
    "i don't have",
    "i do not have",
    "i'm sorry",
    "i apologize",
];

pub const DEFAULT_ERROR_PHRASES: &[&str] = &[
    "error occurred",
    "no information",
    "insufficient information",
    "not enough information",
    "no relevant information",
    "unable to extract",
    "unable to determine",
    "no bio provided",
];

// == Rejection ==
/// Why an output was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("output is empty")]
    Empty,

    #[error("output has {words} words, below the minimum")]
    TooShort { words: usize },

    #[error("output has {words} words, above the maximum")]
    TooLong { words: usize },

    #[error("output contains refusal phrase '{0}'")]
    Refusal(String),

    #[error("output contains error phrase '{0}'")]
    ErrorPhrase(String),
}

// == Output Validator ==
/// Rule set for generated facts. Phrase lists are plain data and can be
/// replaced or extended without touching the checks.
#[derive(Debug, Clone)]
pub struct OutputValidator {
    min_words: usize,
    max_words: usize,
    max_chars: usize,
    refusal_phrases: Vec<String>,
    error_phrases: Vec<String>,
}

impl Default for OutputValidator {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            max_chars: DEFAULT_MAX_CHARS,
            refusal_phrases: lowercase_all(DEFAULT_REFUSAL_PHRASES.iter().copied()),
            error_phrases: lowercase_all(DEFAULT_ERROR_PHRASES.iter().copied()),
        }
    }
}

impl OutputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the refusal phrase list.
    pub fn with_refusal_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.refusal_phrases = lowercase_all(phrases);
        self
    }

    /// Replaces the error/hedging phrase list.
    pub fn with_error_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.error_phrases = lowercase_all(phrases);
        self
    }

    pub fn with_word_limits(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    // == Validate ==
    /// Returns the cleaned output, or the first rule it breaks.
    pub fn validate(&self, raw: &str) -> Result<String, Rejection> {
        let cleaned = strip_wrapping(raw);
        if cleaned.is_empty() {
            return Err(Rejection::Empty);
        }

        let words = cleaned.split_whitespace().count();
        if words < self.min_words {
            return Err(Rejection::TooShort { words });
        }
        if words > self.max_words {
            return Err(Rejection::TooLong { words });
        }

        let lowered = cleaned.to_lowercase().replace('\u{2019}', "'");
        if let Some(phrase) = find_phrase(&lowered, &self.refusal_phrases) {
            return Err(Rejection::Refusal(phrase.to_string()));
        }
        if let Some(phrase) = find_phrase(&lowered, &self.error_phrases) {
            return Err(Rejection::ErrorPhrase(phrase.to_string()));
        }

        Ok(shorten(cleaned, self.max_chars))
    }
}

/// Trims whitespace and any number of matching quote pairs around the text.
fn strip_wrapping(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let mut chars = text.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open), Some(close)) if is_quote_pair(open, close) => {
                text = chars.as_str().trim();
            }
            _ => return text,
        }
    }
}

fn is_quote_pair(open: char, close: char) -> bool {
    matches!(
        (open, close),
        ('"', '"') | ('\'', '\'') | ('`', '`') | ('\u{201c}', '\u{201d}') | ('\u{2018}', '\u{2019}')
    )
}

fn find_phrase<'a>(haystack: &str, phrases: &'a [String]) -> Option<&'a str> {
    phrases
        .iter()
        .find(|phrase| !phrase.is_empty() && haystack.contains(phrase.as_str()))
        .map(String::as_str)
}

/// Cuts text longer than `max_chars` at the last whitespace inside the limit.
fn shorten(text: &str, max_chars: usize) -> String {
    let Some((limit, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..limit];
    let head = match head.rfind(char::is_whitespace) {
        Some(idx) => head[..idx].trim_end(),
        None => head,
    };
    format!("{head}{ELLIPSIS}")
}

fn lowercase_all<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().to_lowercase())
        .collect()
}
