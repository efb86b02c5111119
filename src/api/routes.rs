//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    bio_stats_handler, create_company_handler, delete_company_handler, feedback_handler,
    generate_handler, get_company_handler, health_handler, list_companies_handler,
    research_handler, research_stats_handler, search_companies_handler, summarize_bio_handler,
    update_company_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `POST /api/summarize-bio` - One-fact bio summary
/// - `GET /api/bio-cache-stats` - Bio cache statistics
/// - `POST /api/research-prospect` - Search-backed prospect research
/// - `GET /api/research-cache-stats` - Research cache statistics
/// - `POST /api/generate` - Outreach email draft
/// - `POST /api/feedback` - Store a rating of a generated email
/// - `GET|POST /api/companies` - List or create companies
/// - `GET /api/companies/search?q=` - Search companies by name
/// - `GET|PUT|DELETE /api/companies/:id` - Single company
///
/// # Middleware
/// - CORS: Allows any origin, since requests come from a browser extension
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/summarize-bio", post(summarize_bio_handler))
        .route("/api/bio-cache-stats", get(bio_stats_handler))
        .route("/api/research-prospect", post(research_handler))
        .route("/api/research-cache-stats", get(research_stats_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/feedback", post(feedback_handler))
        .route(
            "/api/companies",
            get(list_companies_handler).post(create_company_handler),
        )
        .route("/api/companies/search", get(search_companies_handler))
        .route(
            "/api/companies/:id",
            get(get_company_handler)
                .put(update_company_handler)
                .delete(delete_company_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
