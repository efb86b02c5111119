//! Integration Tests for API Endpoints
//!
//! Drives the full router with stub model providers and a temporary data directory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use exec_notes::{
    api::create_router,
    bio::BioSummarizer,
    companies::CompanyStore,
    feedback::FeedbackSink,
    generation::EmailGenerator,
    llm::{ProviderError, SearchGenerator, SearchResponse, TextGenerator},
    research::ProspectResearcher,
    AppState,
};
use serde_json::Value;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt;

const BIO: &str = "Jane has spent fifteen years building payment infrastructure. \
                   She led the rollout of real-time settlement across Europe.";

const SEARCH_TEXT: &str = "1. Jane Doe was promoted to CTO of Acme Bank in March 2024.\n\
                           2. Acme Bank announced a partnership with Stripe for instant payouts.\n\
                           3. Short.";

// == Stub Providers ==

struct CountingText {
    reply: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for CountingText {
    async fn generate_text(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct CountingSearch {
    calls: AtomicUsize,
}

#[async_trait]
impl SearchGenerator for CountingSearch {
    async fn generate_with_search(
        &self,
        _system: &str,
        _user: &str,
    ) -> Result<SearchResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SearchResponse {
            text: SEARCH_TEXT.to_string(),
            citations: vec!["https://example.com/news".to_string()],
        })
    }
}

// == Helper Functions ==

struct TestApp {
    router: Router,
    text: Arc<CountingText>,
    search: Arc<CountingSearch>,
    dir: TempDir,
}

fn create_test_app(reply: &'static str) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let text = Arc::new(CountingText {
        reply,
        calls: AtomicUsize::new(0),
    });
    let search = Arc::new(CountingSearch {
        calls: AtomicUsize::new(0),
    });

    let state = AppState::new(
        BioSummarizer::new(text.clone(), 100),
        ProspectResearcher::new(search.clone(), 50, Duration::days(7)),
        EmailGenerator::new(text.clone(), "stub"),
        CompanyStore::new(dir.path().join("companies.json")),
        FeedbackSink::new(dir.path().join("feedback")),
    );

    TestApp {
        router: create_router(state),
        text,
        search,
        dir,
    }
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app("unused");

    let response = app
        .router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

// == Bio Summaries ==

#[tokio::test]
async fn test_summarize_bio_caches_by_content() {
    let app = create_test_app("\"Jane led real-time settlement rollout across Europe.\"");
    let body = serde_json::json!({
        "bio_text": BIO,
        "prospect_name": "Jane Doe",
        "prospect_title": "CTO"
    });

    let (status, first) = send(&app.router, "POST", "/api/summarize-bio", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "success");
    assert_eq!(
        first["summary"],
        "Jane led real-time settlement rollout across Europe."
    );

    let (_, second) = send(&app.router, "POST", "/api/summarize-bio", Some(body)).await;
    assert_eq!(second["summary"], first["summary"]);
    assert_eq!(app.text.calls.load(Ordering::SeqCst), 1);

    let (status, stats) = send(&app.router, "GET", "/api/bio-cache-stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["max_entries"], 100);
    assert!(stats.get("ttl_days").is_none());
}

#[tokio::test]
async fn test_summarize_bio_refusal_is_empty_and_cached() {
    let app = create_test_app("I cannot provide information about this person.");
    let body = serde_json::json!({ "bio_text": BIO });

    let (status, first) = send(&app.router, "POST", "/api/summarize-bio", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["summary"], "");

    let (_, second) = send(&app.router, "POST", "/api/summarize-bio", Some(body)).await;
    assert_eq!(second["summary"], "");
    assert_eq!(app.text.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_summarize_bio_short_input_is_bad_request() {
    let app = create_test_app("unused");
    let body = serde_json::json!({ "bio_text": "   too short   " });

    let (status, json) = send(&app.router, "POST", "/api/summarize-bio", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("bio_text"));
    assert_eq!(app.text.calls.load(Ordering::SeqCst), 0);
}

// == Research ==

#[tokio::test]
async fn test_research_prospect_and_cache_hit() {
    let app = create_test_app("unused");
    let body = serde_json::json!({
        "name": "Jane Doe",
        "title": "CTO",
        "company": "Acme Bank"
    });

    let (status, first) = send(&app.router, "POST", "/api/research-prospect", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["data"]["cached"], false);
    assert_eq!(first["data"]["findings"].as_array().unwrap().len(), 2);
    assert_eq!(first["data"]["findings"][0]["confidence"], "high");
    assert_eq!(first["data"]["citations"][0], "https://example.com/news");

    // Same person, different casing and no title
    let body = serde_json::json!({ "name": "jane doe", "company": "ACME BANK" });
    let (_, second) = send(&app.router, "POST", "/api/research-prospect", Some(body)).await;
    assert_eq!(second["data"]["cached"], true);
    assert_eq!(second["data"]["findings"], first["data"]["findings"]);
    assert_eq!(app.search.calls.load(Ordering::SeqCst), 1);

    let (_, stats) = send(&app.router, "GET", "/api/research-cache-stats", None).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["ttl_days"], 7);
    assert_eq!(stats["max_entries"], 50);
}

#[tokio::test]
async fn test_research_requires_name() {
    let app = create_test_app("unused");
    let body = serde_json::json!({ "name": "  ", "company": "Acme" });

    let (status, _) = send(&app.router, "POST", "/api/research-prospect", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.search.calls.load(Ordering::SeqCst), 0);
}

// == Email Generation ==

fn generate_body() -> Value {
    serde_json::json!({
        "prospect_name": "Jane Doe",
        "prospect_title": "CTO",
        "prospect_company": "Acme Bank",
        "unique_fact": "Led the rollout of real-time settlement across Europe",
        "business_initiative": "Instant payouts",
        "manager_name": "Sam Lee",
        "message_type": "executive_alignment"
    })
}

#[tokio::test]
async fn test_generate_email_from_fenced_reply() {
    let app = create_test_app(
        "```json\n{\"subject\": \"Instant payouts at Acme\", \"body\": \"Hi Jane,\\n\\nSettlement at scale.\"}\n```",
    );

    let (status, json) = send(&app.router, "POST", "/api/generate", Some(generate_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["subject"], "Instant payouts at Acme");
    assert!(json["body"].as_str().unwrap().starts_with("Hi Jane,"));
    assert_eq!(json["metadata"]["message_type"], "executive_alignment");
    assert_eq!(json["metadata"]["manager_name"], "Sam Lee");
    assert_eq!(json["metadata"]["model_provider"], "stub");

    // Not cached: a second request asks the model again
    send(&app.router, "POST", "/api/generate", Some(generate_body())).await;
    assert_eq!(app.text.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_generate_reply_without_body_is_bad_request() {
    let app = create_test_app(r#"{"subject": "Instant payouts at Acme"}"#);

    let (status, json) = send(&app.router, "POST", "/api/generate", Some(generate_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("body"));
}

#[tokio::test]
async fn test_generate_prose_reply_is_bad_request() {
    let app = create_test_app("Sure! Here is a great email for Jane.");

    let (status, _) = send(&app.router, "POST", "/api/generate", Some(generate_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_requires_prospect_fields() {
    let app = create_test_app(r#"{"subject": "S", "body": "B"}"#);
    let mut body = generate_body();
    body["prospect_company"] = Value::String(String::new());

    let (status, json) = send(&app.router, "POST", "/api/generate", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("prospect_company"));
    assert_eq!(app.text.calls.load(Ordering::SeqCst), 0);
}

// == Feedback ==

#[tokio::test]
async fn test_feedback_is_written_to_disk() {
    let app = create_test_app("unused");
    let body = serde_json::json!({
        "feedback_type": "negative",
        "original_output": {"subject": "S", "body": "B"},
        "improved_version": "A shorter body",
        "metadata": {"message_type": "cold_outreach"},
        "timestamp": "2026-10-16T09:30:00Z"
    });

    let (status, json) = send(&app.router, "POST", "/api/feedback", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");

    let files: Vec<_> = std::fs::read_dir(app.dir.path().join("feedback"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(saved["improved_version"], "A shorter body");
}

// == Companies ==

#[tokio::test]
async fn test_company_lifecycle() {
    let app = create_test_app("unused");

    let (status, created) = send(
        &app.router,
        "POST",
        "/api/companies",
        Some(serde_json::json!({
            "name": "Acme Bank",
            "industry": "Banking",
            "initiatives": ["Instant payouts", "Cloud migration"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app.router,
        "POST",
        "/api/companies",
        Some(serde_json::json!({ "name": "acme bank" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = send(
        &app.router,
        "PUT",
        &format!("/api/companies/{id}"),
        Some(serde_json::json!({ "industry": "Fintech" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["industry"], "Fintech");
    assert_eq!(updated["initiatives"].as_array().unwrap().len(), 2);

    let (_, found) = send(&app.router, "GET", "/api/companies/search?q=acme", None).await;
    assert_eq!(found["companies"].as_array().unwrap().len(), 1);

    let (_, short) = send(&app.router, "GET", "/api/companies/search?q=a", None).await;
    assert!(short["companies"].as_array().unwrap().is_empty());

    let (status, _) = send(&app.router, "DELETE", &format!("/api/companies/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, "GET", &format!("/api/companies/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app.router, "GET", "/api/companies", None).await;
    assert!(listed["companies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_company_too_many_initiatives() {
    let app = create_test_app("unused");

    let (status, json) = send(
        &app.router,
        "POST",
        "/api/companies",
        Some(serde_json::json!({
            "name": "Globex",
            "initiatives": ["a", "b", "c", "d"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("initiatives"));
}

#[tokio::test]
async fn test_company_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("companies.json");

    let created = assert_ok!(CompanyStore::new(&path).create("Initech", "Software", vec![]).await);

    let reopened = CompanyStore::new(&path);
    let fetched = assert_ok!(reopened.get(&created.id).await);
    assert_eq!(fetched, created);
    assert_err!(reopened.get("missing").await);
}
