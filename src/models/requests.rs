//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::bio::MIN_BIO_CHARS;
use crate::generation::{EmailRequest, MessageType, DEFAULT_MANAGER_NAME};

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub prospect_name: String,
    pub prospect_title: String,
    pub prospect_company: String,
    pub unique_fact: String,
    pub business_initiative: String,
    #[serde(default = "default_manager_name")]
    pub manager_name: String,
    /// `cold_outreach`, `in_person_ask` or `executive_alignment`
    pub message_type: String,
    #[serde(default)]
    pub meeting_purpose: Option<String>,
    #[serde(default)]
    pub linkedin_insight: Option<String>,
}

fn default_manager_name() -> String {
    DEFAULT_MANAGER_NAME.to_string()
}

impl GenerateRequest {
    pub fn validate(&self) -> Option<String> {
        let required = [
            ("prospect_name", &self.prospect_name),
            ("prospect_title", &self.prospect_title),
            ("prospect_company", &self.prospect_company),
            ("unique_fact", &self.unique_fact),
            ("business_initiative", &self.business_initiative),
        ];
        required
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| format!("{field} cannot be empty"))
    }

    pub fn into_email_request(self) -> EmailRequest {
        let manager_name = match self.manager_name.trim() {
            "" => DEFAULT_MANAGER_NAME.to_string(),
            name => name.to_string(),
        };
        EmailRequest {
            message_type: MessageType::from_name(&self.message_type),
            prospect_name: self.prospect_name.trim().to_string(),
            prospect_title: self.prospect_title.trim().to_string(),
            prospect_company: self.prospect_company.trim().to_string(),
            unique_fact: self.unique_fact,
            business_initiative: self.business_initiative,
            manager_name,
            meeting_purpose: self.meeting_purpose,
            linkedin_insight: self.linkedin_insight,
        }
    }
}

/// Body of `POST /api/summarize-bio`
#[derive(Debug, Clone, Deserialize)]
pub struct BioSummaryRequest {
    /// Full bio / about section text
    pub bio_text: String,
    #[serde(default)]
    pub prospect_name: Option<String>,
    #[serde(default)]
    pub prospect_title: Option<String>,
}

impl BioSummaryRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.bio_text.trim().chars().count() < MIN_BIO_CHARS {
            return Some(format!(
                "bio_text must be at least {MIN_BIO_CHARS} characters"
            ));
        }
        None
    }
}

/// Body of `POST /api/research-prospect`
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub company: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl ResearchRequest {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name cannot be empty".to_string());
        }
        if self.company.trim().is_empty() {
            return Some("company cannot be empty".to_string());
        }
        None
    }
}

/// Body of `POST /api/companies`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub initiatives: Option<Vec<String>>,
}

/// Body of `PUT /api/companies/:id`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub initiatives: Option<Vec<String>>,
}

/// Query string of `GET /api/companies/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
