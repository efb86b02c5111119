//! API Handlers
//!
//! HTTP request handlers for the bio, research, email, feedback and company
//! endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::bio::BioSummarizer;
use crate::companies::{Company, CompanyStore};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::feedback::{FeedbackRecord, FeedbackSink};
use crate::generation::{EmailGenerator, GeneratedEmail};
use crate::llm::{AnthropicClient, PerplexityClient, TextGenerator};
use crate::models::{
    BioSummaryRequest, BioSummaryResponse, CompanyListResponse, CreateCompanyRequest,
    FeedbackResponse, GenerateRequest, HealthResponse, ResearchRequest, ResearchResponse,
    SearchQuery, StatsResponse, UpdateCompanyRequest,
};
use crate::research::ProspectResearcher;

/// Shortest query the company search will act on.
const MIN_SEARCH_CHARS: usize = 2;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub bio: Arc<BioSummarizer>,
    pub research: Arc<ProspectResearcher>,
    pub email: Arc<EmailGenerator>,
    pub companies: Arc<CompanyStore>,
    pub feedback: Arc<FeedbackSink>,
}

impl AppState {
    pub fn new(
        bio: BioSummarizer,
        research: ProspectResearcher,
        email: EmailGenerator,
        companies: CompanyStore,
        feedback: FeedbackSink,
    ) -> Self {
        Self {
            bio: Arc::new(bio),
            research: Arc::new(research),
            email: Arc::new(email),
            companies: Arc::new(companies),
            feedback: Arc::new(feedback),
        }
    }

    /// Builds the provider clients and services from configuration.
    ///
    /// Fails when either provider key is missing or the research TTL is
    /// unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let research_ttl = config.research_ttl()?;
        let anthropic: Arc<dyn TextGenerator> = Arc::new(AnthropicClient::from_config(config)?);
        let perplexity = PerplexityClient::from_config(config)?;

        let bio = BioSummarizer::new(anthropic.clone(), config.bio_cache_max_entries);
        let research = ProspectResearcher::new(
            Arc::new(perplexity),
            config.research_cache_max_entries,
            research_ttl,
        );
        let email = EmailGenerator::new(anthropic, "anthropic");
        let companies = CompanyStore::new(config.companies_file.clone());
        let feedback = FeedbackSink::new(config.feedback_dir.clone());

        Ok(Self::new(bio, research, email, companies, feedback))
    }
}

// == Bio ==
/// Handler for POST /api/summarize-bio
pub async fn summarize_bio_handler(
    State(state): State<AppState>,
    Json(req): Json<BioSummaryRequest>,
) -> Result<Json<BioSummaryResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let summary = state
        .bio
        .summarize(
            &req.bio_text,
            req.prospect_name.as_deref(),
            req.prospect_title.as_deref(),
        )
        .await;

    Ok(Json(BioSummaryResponse::new(summary)))
}

/// Handler for GET /api/bio-cache-stats
pub async fn bio_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.bio.stats().await;
    let max_entries = state.bio.max_entries().await;
    Json(StatsResponse::new(stats, max_entries, None))
}

// == Research ==
/// Handler for POST /api/research-prospect
///
/// Provider failures still answer 200; the result carries an `error` field.
pub async fn research_handler(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let result = state
        .research
        .research(
            req.name.trim(),
            req.title.as_deref(),
            req.company.trim(),
            req.linkedin_url.as_deref(),
        )
        .await;

    Ok(Json(ResearchResponse::new(result)))
}

/// Handler for GET /api/research-cache-stats
pub async fn research_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.research.stats().await;
    let max_entries = state.research.max_entries().await;
    Json(StatsResponse::new(
        stats,
        max_entries,
        Some(state.research.ttl_days()),
    ))
}

// == Email ==
/// Handler for POST /api/generate
///
/// Malformed or incomplete model replies answer 400, provider failures 502.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedEmail>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let email = state.email.generate(&req.into_email_request()).await?;
    Ok(Json(email))
}

/// Handler for POST /api/feedback
pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(record): Json<FeedbackRecord>,
) -> Result<Json<FeedbackResponse>> {
    state.feedback.save(&record).await?;
    Ok(Json(FeedbackResponse::saved()))
}

// == Companies ==
/// Handler for GET /api/companies
pub async fn list_companies_handler(
    State(state): State<AppState>,
) -> Result<Json<CompanyListResponse>> {
    let companies = state.companies.list().await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// Handler for GET /api/companies/search?q=
pub async fn search_companies_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CompanyListResponse>> {
    let q = query.q.trim();
    if q.chars().count() < MIN_SEARCH_CHARS {
        return Ok(Json(CompanyListResponse { companies: vec![] }));
    }

    let companies = state.companies.search(q).await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// Handler for GET /api/companies/:id
pub async fn get_company_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Company>> {
    Ok(Json(state.companies.get(&id).await?))
}

/// Handler for POST /api/companies
pub async fn create_company_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<Company>)> {
    let company = state
        .companies
        .create(
            &req.name,
            req.industry.as_deref().unwrap_or_default(),
            req.initiatives.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// Handler for PUT /api/companies/:id
pub async fn update_company_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<Company>> {
    let company = state
        .companies
        .update(
            &id,
            req.name.as_deref(),
            req.industry.as_deref(),
            req.initiatives,
        )
        .await?;

    Ok(Json(company))
}

/// Handler for DELETE /api/companies/:id
pub async fn delete_company_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.companies.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
