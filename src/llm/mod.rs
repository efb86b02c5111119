//! LLM Provider Module
//!
//! The two model capabilities the services depend on, plus HTTP clients for
//! Anthropic (plain text generation) and Perplexity (search-augmented
//! generation). Services only see the traits.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod anthropic;
mod perplexity;

pub use anthropic::AnthropicClient;
pub use perplexity::PerplexityClient;

/// Timeout applied to every provider request.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 60;

// == Provider Error ==
/// Failure talking to a model provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// == Search Response ==
/// Text from a search-augmented model and the sources it cited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub text: String,
    pub citations: Vec<String>,
}

// == Text Generator ==
/// Generates text from a system and a user prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ProviderError>;
}

// == Search Generator ==
/// Generates text grounded in a live web search.
#[async_trait]
pub trait SearchGenerator: Send + Sync {
    async fn generate_with_search(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<SearchResponse, ProviderError>;
}

/// Reads a successful response body and decodes it as JSON.
///
/// Transport failures surface as `Http`, undecodable bodies as `Parse`.
pub(crate) async fn decode_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let body = response.text().await?;
    decode(&body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    Ok(serde_json::from_str(body)?)
}

/// Pulls the provider's own message out of an error body when it has one.
pub(crate) fn api_error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_extracts_nested_message() {
        let body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"slow down"}}"#;
        assert_eq!(api_error_message(body.to_string()), "slow down");
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let result = decode::<SearchResponse>("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[test]
    fn test_well_formed_body_decodes() {
        let response: SearchResponse =
            decode(r#"{"text":"found","citations":["https://a.example"]}"#).unwrap();
        assert_eq!(response.text, "found");
        assert_eq!(response.citations.len(), 1);
    }

    #[test]
    fn test_api_error_message_falls_back_to_body() {
        assert_eq!(api_error_message("Bad Gateway".to_string()), "Bad Gateway");
    }
}
