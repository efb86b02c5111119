//! Bio Summarizer
//!
//! Compresses a prospect bio into one validated fact, caching by fingerprint.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::prompts::{bio_user_prompt, BIO_SYSTEM_PROMPT};
use crate::cache::{BoundedCache, CacheStats, SharedCache};
use crate::llm::TextGenerator;
use crate::text::{bio_key, truncate_at_sentence};
use crate::validation::OutputValidator;

/// Bios shorter than this (after trimming) are not worth a model call.
pub const MIN_BIO_CHARS: usize = 20;
/// Character budget for the bio sent to the model.
pub const BIO_MAX_CHARS: usize = 1000;
/// How far past the budget a sentence boundary may be sought.
pub const BIO_SEARCH_RANGE: usize = 200;

// == Bio Summarizer ==
/// Turns bios into single-sentence facts.
///
/// Results are cached without expiry. Rejected model output is cached as an
/// empty string so the same bio does not keep hitting the model; provider
/// failures are not cached and will be retried on the next call.
pub struct BioSummarizer {
    generator: Arc<dyn TextGenerator>,
    cache: SharedCache<String>,
    validator: OutputValidator,
}

impl BioSummarizer {
    // == Constructor ==
    pub fn new(generator: Arc<dyn TextGenerator>, capacity: usize) -> Self {
        Self {
            generator,
            cache: BoundedCache::new(capacity).shared(),
            validator: OutputValidator::default(),
        }
    }

    /// Swaps in a differently configured validator.
    pub fn with_validator(mut self, validator: OutputValidator) -> Self {
        self.validator = validator;
        self
    }

    // == Summarize ==
    /// Returns one fact about the prospect, or an empty string when there is
    /// no usable answer.
    pub async fn summarize(
        &self,
        bio_text: &str,
        prospect_name: Option<&str>,
        prospect_title: Option<&str>,
    ) -> String {
        let bio_text = bio_text.trim();
        if bio_text.chars().count() < MIN_BIO_CHARS {
            debug!("bio too short to summarize");
            return String::new();
        }

        let bio = truncate_at_sentence(bio_text, BIO_MAX_CHARS, BIO_SEARCH_RANGE);
        let key = bio_key(bio, prospect_name, prospect_title);

        let cached = self.cache.write().await.get(&key);
        if let Some(summary) = cached {
            debug!(prospect = prospect_name.unwrap_or_default(), "bio cache hit");
            return summary;
        }

        info!(
            prospect = prospect_name.unwrap_or_default(),
            bio_chars = bio.chars().count(),
            "bio cache miss, calling model"
        );

        let user_prompt = bio_user_prompt(bio, prospect_name, prospect_title);
        let raw = match self.generator.generate_text(BIO_SYSTEM_PROMPT, &user_prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "bio summarization failed");
                return String::new();
            }
        };

        let summary = match self.validator.validate(&raw) {
            Ok(summary) => summary,
            Err(reason) => {
                warn!(%reason, "rejected generated bio fact");
                String::new()
            }
        };

        self.cache.write().await.put(key, summary.clone());
        summary
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn max_entries(&self) -> usize {
        self.cache.read().await.capacity()
    }

    /// Drops all cached summaries.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    pub fn cache(&self) -> SharedCache<String> {
        self.cache.clone()
    }
}
