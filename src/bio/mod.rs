//! Bio Module
//!
//! LinkedIn bio summarization into a single outreach-ready fact.

mod prompts;
mod summarizer;

pub use prompts::{bio_user_prompt, BIO_SYSTEM_PROMPT};
pub use summarizer::{BioSummarizer, BIO_MAX_CHARS, BIO_SEARCH_RANGE, MIN_BIO_CHARS};
