//! Research result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Confidence ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

// == Research Finding ==
/// One fact pulled from a research response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchFinding {
    pub fact: String,
    pub confidence: Confidence,
}

// == Research Result ==
/// Everything known about a prospect after one research call.
///
/// The cache holds these by value; readers always get their own copy, so
/// flipping `cached` on a returned result never touches the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Parsed facts in order of appearance, at most five
    pub findings: Vec<ResearchFinding>,
    /// Unmodified model output
    pub raw_response: String,
    /// Source URLs reported by the search model
    pub citations: Vec<String>,
    /// True when this copy was served from the cache
    pub cached: bool,
    /// When the research was performed
    pub timestamp: DateTime<Utc>,
    pub prospect_name: String,
    pub prospect_company: String,
    /// Provider failure description; such results are never cached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResearchResult {
    /// Result returned when the search call fails.
    pub fn failed(
        name: impl Into<String>,
        company: impl Into<String>,
        error: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            findings: Vec::new(),
            raw_response: String::new(),
            citations: Vec::new(),
            cached: false,
            timestamp,
            prospect_name: name.into(),
            prospect_company: company.into(),
            error: Some(error.into()),
        }
    }

    /// Marks this copy as served from the cache.
    pub fn into_cached(mut self) -> Self {
        self.cached = true;
        self
    }

    /// Fact texts only, in order.
    pub fn facts(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.fact.clone()).collect()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
