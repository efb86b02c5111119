//! Error types for the service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Errors that can reach an HTTP caller or abort startup.
///
/// Bio and research absorb provider failures into empty or error-annotated
/// results; only email generation surfaces them, as `Upstream`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body or parameters failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record clashes with an existing one
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Deployment is unusable, e.g. a missing API credential
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Company data or feedback file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A model provider failed while the caller waited on its answer
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Configuration(_) | AppError::Storage(_) => {
                tracing::error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(_) => {
                tracing::error!("{self}");
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
