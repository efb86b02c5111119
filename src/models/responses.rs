//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::companies::Company;
use crate::research::ResearchResult;

/// Body of `POST /api/summarize-bio`
#[derive(Debug, Clone, Serialize)]
pub struct BioSummaryResponse {
    /// May be empty when no usable fact could be produced
    pub summary: String,
    pub status: String,
}

impl BioSummaryResponse {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            status: "success".to_string(),
        }
    }
}

/// Body of `POST /api/research-prospect`
#[derive(Debug, Clone, Serialize)]
pub struct ResearchResponse {
    pub success: bool,
    pub data: ResearchResult,
}

impl ResearchResponse {
    pub fn new(data: ResearchResult) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of the cache statistics endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub max_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Only reported for caches with expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_days: Option<i64>,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, max_entries: usize, ttl_days: Option<i64>) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            max_entries,
            ttl_days,
        }
    }
}

/// Body of `GET /api/companies` and the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

/// Body of `POST /api/feedback`
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub status: String,
    pub message: String,
}

impl FeedbackResponse {
    pub fn saved() -> Self {
        Self {
            status: "success".to_string(),
            message: "Feedback saved successfully".to_string(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
