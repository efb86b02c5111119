//! Prospect Researcher
//!
//! Web-search-backed research with a TTL cache keyed by person and company.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, info};

use super::findings::parse_findings;
use super::prompts::{research_user_prompt, RESEARCH_SYSTEM_PROMPT};
use super::result::ResearchResult;
use crate::cache::{BoundedCache, CacheStats, Clock, SharedCache, SystemClock};
use crate::llm::SearchGenerator;
use crate::text::research_key;

// == Prospect Researcher ==
/// Finds recent, specific facts about a prospect.
///
/// One cache slot per (name, company), case-insensitive; title and profile
/// URL refine the prompt but not the key. Entries expire after the TTL.
/// Failed searches return an error-annotated result and are not cached.
pub struct ProspectResearcher {
    generator: Arc<dyn SearchGenerator>,
    cache: SharedCache<ResearchResult>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ProspectResearcher {
    // == Constructors ==
    pub fn new(generator: Arc<dyn SearchGenerator>, capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(generator, capacity, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(
        generator: Arc<dyn SearchGenerator>,
        capacity: usize,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            generator,
            cache: BoundedCache::with_clock(capacity, Some(ttl), clock.clone()).shared(),
            clock,
            ttl,
        }
    }

    // == Research ==
    /// Researches a prospect, serving a fresh cached result when available.
    pub async fn research(
        &self,
        name: &str,
        title: Option<&str>,
        company: &str,
        linkedin_url: Option<&str>,
    ) -> ResearchResult {
        let key = research_key(name, company);

        let cached = self.cache.write().await.get(&key);
        if let Some(result) = cached {
            debug!(name, company, "research cache hit");
            return result.into_cached();
        }

        info!(name, company, "research cache miss, calling search model");

        let prompt = research_user_prompt(name, title, company, linkedin_url);
        let response = match self
            .generator
            .generate_with_search(RESEARCH_SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(name, company, error = %e, "prospect research failed");
                return ResearchResult::failed(name, company, e.to_string(), self.clock.now());
            }
        };

        let findings = parse_findings(&response.text);
        debug!(
            name,
            findings = findings.len(),
            chars = response.text.len(),
            "parsed research response"
        );

        let result = ResearchResult {
            findings,
            raw_response: response.text,
            citations: response.citations,
            cached: false,
            timestamp: self.clock.now(),
            prospect_name: name.to_string(),
            prospect_company: company.to_string(),
            error: None,
        };

        self.cache.write().await.put(key, result.clone());
        result
    }

    /// Fact texts only.
    pub async fn research_facts(&self, name: &str, company: &str) -> Vec<String> {
        self.research(name, None, company, None).await.facts()
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn max_entries(&self) -> usize {
        self.cache.read().await.capacity()
    }

    pub fn ttl_days(&self) -> i64 {
        self.ttl.num_days()
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    /// Handle for the background expiry sweep.
    pub fn cache(&self) -> SharedCache<ResearchResult> {
        self.cache.clone()
    }
}
