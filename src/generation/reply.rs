//! Parsing of the model's JSON email reply.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::generator::GenerationError;

/// Body of a fenced block: ```` ```json\n...\n``` ````.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*\n(.*?)\n```").expect("fenced block pattern is valid")
});

/// Any fence marker, for replies whose fences are not on their own lines.
static FENCE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("fence marker pattern is valid"));

/// Subject and body pulled from a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// Strips markdown code fences and decodes the remaining JSON.
pub fn parse_json_reply(content: &str) -> Result<Value, GenerationError> {
    let content = content.trim();
    let json = if content.starts_with("```") {
        match FENCED_BLOCK.captures(content).and_then(|c| c.get(1)) {
            Some(inner) => inner.as_str().to_string(),
            None => FENCE_MARKER.replace_all(content, "").trim().to_string(),
        }
    } else {
        content.to_string()
    };

    serde_json::from_str(&json).map_err(|e| GenerationError::MalformedReply(e.to_string()))
}

/// Decodes a reply and requires non-blank string `subject` and `body` fields.
pub fn parse_email_draft(content: &str) -> Result<EmailDraft, GenerationError> {
    let reply = parse_json_reply(content)?;
    Ok(EmailDraft {
        subject: required_text(&reply, "subject")?,
        body: required_text(&reply, "body")?,
    })
}

fn required_text(reply: &Value, field: &'static str) -> Result<String, GenerationError> {
    reply
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(GenerationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let draft = parse_email_draft(r#"{"subject": "Core banking, faster", "body": "Hi Jane,"}"#)
            .unwrap();
        assert_eq!(draft.subject, "Core banking, faster");
        assert_eq!(draft.body, "Hi Jane,");
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let content = "```json\n{\"subject\": \"S\", \"body\": \"B\"}\n```";
        let draft = parse_email_draft(content).unwrap();
        assert_eq!(draft, EmailDraft { subject: "S".into(), body: "B".into() });
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        let content = "```\n{\"subject\": \"S\", \"body\": \"B\"}\n```";
        assert!(parse_email_draft(content).is_ok());
    }

    #[test]
    fn test_inline_fence_markers_are_removed() {
        let content = "```json {\"subject\": \"S\", \"body\": \"B\"} ```";
        assert!(parse_email_draft(content).is_ok());
    }

    #[test]
    fn test_missing_body() {
        let result = parse_email_draft(r#"{"subject": "Only a subject"}"#);
        assert!(matches!(result, Err(GenerationError::MissingField("body"))));
    }

    #[test]
    fn test_missing_subject_reported_first() {
        let result = parse_email_draft(r#"{"text": "no fields"}"#);
        assert!(matches!(result, Err(GenerationError::MissingField("subject"))));
    }

    #[test]
    fn test_non_string_body_is_missing() {
        let result = parse_email_draft(r#"{"subject": "S", "body": ["a", "b"]}"#);
        assert!(matches!(result, Err(GenerationError::MissingField("body"))));
    }

    #[test]
    fn test_prose_is_malformed() {
        let result = parse_json_reply("Here is your email: Subject: Hello");
        assert!(matches!(result, Err(GenerationError::MalformedReply(_))));
    }
}
