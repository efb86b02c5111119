//! API Module
//!
//! HTTP handlers and routing for the service REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `POST /api/summarize-bio` - Summarize a bio into one fact
//! - `POST /api/research-prospect` - Research a prospect
//! - `GET /api/bio-cache-stats`, `GET /api/research-cache-stats` - Cache statistics
//! - `/api/companies[...]` - Company records

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
