//! Email Generator
//!
//! Builds the prompt, calls the text model and turns its JSON reply into a
//! subject, a body and the metadata describing the request.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::message_type::MessageType;
use super::prompts::{email_system_prompt, email_user_prompt, first_name};
use super::reply::parse_email_draft;
use crate::error::AppError;
use crate::llm::{ProviderError, TextGenerator};

/// Sender placeholder when the caller does not name one.
pub const DEFAULT_MANAGER_NAME: &str = "[Manager's Name]";

// == Generation Error ==
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("model reply is not valid JSON: {0}")]
    MalformedReply(String),

    #[error("model reply is missing '{0}'")]
    MissingField(&'static str),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Provider(e) => AppError::Upstream(e.to_string()),
            reply_error => AppError::InvalidRequest(reply_error.to_string()),
        }
    }
}

// == Request / Result ==
/// Everything the prompt needs about one prospect.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub message_type: MessageType,
    pub prospect_name: String,
    pub prospect_title: String,
    pub prospect_company: String,
    pub unique_fact: String,
    pub business_initiative: String,
    pub manager_name: String,
    /// Only used for in-person asks
    pub meeting_purpose: Option<String>,
    /// Bio summary appended to the unique fact
    pub linkedin_insight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMetadata {
    pub message_type: MessageType,
    pub prospect_name: String,
    pub prospect_company: String,
    pub manager_name: String,
    pub model_provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedEmail {
    pub subject: String,
    pub body: String,
    pub metadata: EmailMetadata,
}

// == Email Generator ==
/// Writes one outreach email per call. Results are not cached.
pub struct EmailGenerator {
    generator: Arc<dyn TextGenerator>,
    provider: String,
}

impl EmailGenerator {
    /// `provider` is reported back in each email's metadata.
    pub fn new(generator: Arc<dyn TextGenerator>, provider: impl Into<String>) -> Self {
        Self {
            generator,
            provider: provider.into(),
        }
    }

    pub async fn generate(&self, request: &EmailRequest) -> Result<GeneratedEmail, GenerationError> {
        let system_prompt = email_system_prompt(
            &request.manager_name,
            first_name(&request.prospect_name),
            request.message_type,
        );
        let user_prompt = email_user_prompt(request);

        info!(
            message_type = request.message_type.as_str(),
            prospect = %request.prospect_name,
            company = %request.prospect_company,
            "generating outreach email"
        );

        let raw = self
            .generator
            .generate_text(&system_prompt, &user_prompt)
            .await?;

        let draft = parse_email_draft(&raw).inspect_err(|e| {
            warn!(error = %e, reply_chars = raw.chars().count(), "unusable email reply");
        })?;

        Ok(GeneratedEmail {
            subject: draft.subject,
            body: draft.body,
            metadata: EmailMetadata {
                message_type: request.message_type,
                prospect_name: request.prospect_name.clone(),
                prospect_company: request.prospect_company.clone(),
                manager_name: request.manager_name.clone(),
                model_provider: self.provider.clone(),
            },
        })
    }
}
