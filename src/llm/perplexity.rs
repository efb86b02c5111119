//! Perplexity chat completions client (OpenAI-compatible, with web search).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    api_error_message, decode_body, ProviderError, SearchGenerator, SearchResponse,
    REQUEST_TIMEOUT_SECS,
};
use crate::config::Config;
use crate::error::{AppError, Result};

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";
const MAX_TOKENS: u32 = 1500;
/// Low randomness for factual, repeatable answers.
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_search_response(self) -> Option<SearchResponse> {
        let text = self.choices.into_iter().next()?.message.content?;
        Some(SearchResponse {
            text,
            citations: self.citations,
        })
    }
}

// == Perplexity Client ==
/// Search-augmented generation through Perplexity's online models.
#[derive(Clone)]
pub struct PerplexityClient {
    client: Client,
    api_key: String,
    model: String,
}

impl PerplexityClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Builds the client from configuration, failing when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.require_perplexity_key()?, config.perplexity_model.clone())
    }
}

#[async_trait]
impl SearchGenerator for PerplexityClient {
    async fn generate_with_search(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> std::result::Result<SearchResponse, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(PERPLEXITY_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let body: ChatResponse = decode_body(response).await?;
        let result = body
            .into_search_response()
            .ok_or(ProviderError::EmptyContent)?;

        debug!(
            chars = result.text.len(),
            citations = result.citations.len(),
            "perplexity call succeeded"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_low_temperature() {
        let request = ChatRequest {
            model: "sonar",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "who",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "who");
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_response_with_citations() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "1. A fact."}}],
            "citations": ["https://example.com/a", "https://example.com/b"]
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        let result = response.into_search_response().unwrap();

        assert_eq!(result.text, "1. A fact.");
        assert_eq!(result.citations.len(), 2);
    }

    #[test]
    fn test_response_without_citations() {
        let body = r#"{"choices": [{"message": {"content": "text"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_search_response().unwrap().citations.is_empty());
    }

    #[test]
    fn test_response_without_choices_is_empty() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.into_search_response().is_none());
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(matches!(
            PerplexityClient::from_config(&Config::default()),
            Err(AppError::Configuration(_))
        ));
    }
}
