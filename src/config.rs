//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;
use tracing::warn;

use crate::error::{AppError, Result};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_PERPLEXITY_MODEL: &str = "llama-3.1-sonar-small-128k-online";

/// Service configuration parameters.
///
/// Everything except the API keys has a default. Keys are only checked when
/// a provider client is built.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Capacity of the bio summary cache
    pub bio_cache_max_entries: usize,
    /// Capacity of the prospect research cache
    pub research_cache_max_entries: usize,
    /// Lifetime of a research cache entry in days
    pub research_cache_ttl_days: i64,
    /// Seconds between sweeps of expired research entries
    pub cleanup_interval: u64,
    /// Location of the company JSON file
    pub companies_file: PathBuf,
    /// Directory receiving one JSON file per feedback submission
    pub feedback_dir: PathBuf,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub perplexity_api_key: Option<String>,
    pub perplexity_model: String,
}

impl Config {
    /// Creates a new Config from environment variables, reading `.env` first
    /// when present.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` (default: 8000)
    /// - `BIO_CACHE_MAX_ENTRIES` (default: 1000)
    /// - `RESEARCH_CACHE_MAX_ENTRIES` (default: 500)
    /// - `RESEARCH_CACHE_TTL_DAYS` (default: 7, values below 1 fall back to it)
    /// - `CLEANUP_INTERVAL` seconds (default: 3600)
    /// - `COMPANIES_FILE` (default: data/companies.json)
    /// - `FEEDBACK_DIR` (default: feedback)
    /// - `ANTHROPIC_API_KEY`, `ANTHROPIC_MODEL`
    /// - `PERPLEXITY_API_KEY`, `PERPLEXITY_MODEL`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            bio_cache_max_entries: parse_var("BIO_CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.bio_cache_max_entries),
            research_cache_max_entries: parse_var("RESEARCH_CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.research_cache_max_entries),
            research_cache_ttl_days: positive_or_default(
                "RESEARCH_CACHE_TTL_DAYS",
                parse_var("RESEARCH_CACHE_TTL_DAYS"),
                defaults.research_cache_ttl_days,
            ),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            companies_file: env::var("COMPANIES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.companies_file),
            feedback_dir: non_empty_var("FEEDBACK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.feedback_dir),
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            anthropic_model: non_empty_var("ANTHROPIC_MODEL").unwrap_or(defaults.anthropic_model),
            perplexity_api_key: non_empty_var("PERPLEXITY_API_KEY"),
            perplexity_model: non_empty_var("PERPLEXITY_MODEL")
                .unwrap_or(defaults.perplexity_model),
        }
    }

    /// Research cache lifetime.
    ///
    /// A non-positive day count would expire every entry on insert, and a huge
    /// one does not fit a `Duration`; both are configuration errors.
    pub fn research_ttl(&self) -> Result<Duration> {
        let days = self.research_cache_ttl_days;
        if days <= 0 {
            return Err(AppError::Configuration(format!(
                "RESEARCH_CACHE_TTL_DAYS must be at least 1, got {days}"
            )));
        }
        Duration::try_days(days).ok_or_else(|| {
            AppError::Configuration(format!("RESEARCH_CACHE_TTL_DAYS is out of range: {days}"))
        })
    }

    pub fn require_anthropic_key(&self) -> Result<String> {
        self.anthropic_api_key
            .clone()
            .ok_or_else(|| AppError::Configuration("ANTHROPIC_API_KEY is not set".to_string()))
    }

    pub fn require_perplexity_key(&self) -> Result<String> {
        self.perplexity_api_key
            .clone()
            .ok_or_else(|| AppError::Configuration("PERPLEXITY_API_KEY is not set".to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            bio_cache_max_entries: 1000,
            research_cache_max_entries: 500,
            research_cache_ttl_days: 7,
            cleanup_interval: 3600,
            companies_file: PathBuf::from("data/companies.json"),
            feedback_dir: PathBuf::from("feedback"),
            anthropic_api_key: None,
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            perplexity_api_key: None,
            perplexity_model: DEFAULT_PERPLEXITY_MODEL.to_string(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn positive_or_default(key: &str, value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) if v > 0 => v,
        Some(v) => {
            warn!("{key}={v} is not positive, using default {default}");
            default
        }
        None => default,
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
