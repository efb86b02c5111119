//! Prompts for outreach email generation.

use super::generator::EmailRequest;
use super::message_type::MessageType;

/// Greeting name used when the prospect name is blank.
const FALLBACK_FIRST_NAME: &str = "there";

/// System prompt for one email written on behalf of `manager_name`.
pub fn email_system_prompt(manager_name: &str, first_name: &str, kind: MessageType) -> String {
    format!(
        "You are a senior executive writing an outreach email to an enterprise \
         technology leader on behalf of {manager_name}, who will send it.\n\
         Write one email that reads like a board-ready memo with a human voice.\n\n\
         {instructions}\n\n\
         Structure: greeting (\"Hi {first_name},\"), hook, business case, value, \
         social proof, one-sentence call to action.\n\
         Constraints: subject of at most 6 words; body of 80 to 110 words; \
         no buzzwords, hype or jargon; write like a peer, not a vendor.",
        instructions = kind.instructions(),
    )
}

/// User prompt carrying the prospect details and the JSON output contract.
pub fn email_user_prompt(request: &EmailRequest) -> String {
    let mut fact = request.unique_fact.trim().to_string();
    if let Some(insight) = non_blank(request.linkedin_insight.as_deref()) {
        fact.push_str("\n\nAdditional context from LinkedIn: ");
        fact.push_str(insight);
    }

    let mut prompt = format!(
        "Write one executive outreach email for this prospect:\n\
         - Name: {name}\n\
         - Title: {title}\n\
         - Company: {company}\n\
         - Unique Fact: {fact}\n\
         - Business Initiative: {initiative}",
        name = request.prospect_name,
        title = request.prospect_title,
        company = request.prospect_company,
        initiative = request.business_initiative,
    );

    if request.message_type == MessageType::InPersonAsk {
        if let Some(purpose) = non_blank(request.meeting_purpose.as_deref()) {
            prompt.push_str(&format!("\n- Meeting Purpose: {purpose}"));
        }
    }

    prompt.push_str(
        "\n\nReturn ONLY a JSON object of the form \
         {\"subject\": \"...\", \"body\": \"...\"} with no code fences or other text.",
    );
    prompt
}

/// First word of the prospect name, for the greeting.
pub fn first_name(prospect_name: &str) -> &str {
    prospect_name
        .split_whitespace()
        .next()
        .unwrap_or(FALLBACK_FIRST_NAME)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
