//! Prompt text for prospect research.

pub const RESEARCH_SYSTEM_PROMPT: &str = "\
You are a research assistant specializing in finding compelling, specific facts about executives \
for business outreach. Focus on AI, technology, and digital transformation topics. Be factual and \
cite sources. If you cannot find substantial information, say so clearly.";

/// User prompt asking for 2-4 numbered, recent, technology-leaning facts.
pub fn research_user_prompt(
    name: &str,
    title: Option<&str>,
    company: &str,
    linkedin_url: Option<&str>,
) -> String {
    let subject = match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("{name}, {title} at {company}"),
        None => format!("{name} at {company}"),
    };

    let profile = linkedin_url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|url| format!("\nLinkedIn profile: {url}\n"))
        .unwrap_or_default();

    format!(
        "Research {subject}.\n{profile}
Find 2-4 compelling unique facts about them suitable for executive outreach emails.

Focus areas:
- Blog posts or articles they have written about AI, technology, digital transformation, or innovation
- Speaking engagements at conferences or industry events
- Awards, recognition, or industry accolades
- Major company initiatives, projects, or transformations they have led
- Quotes or interviews in major publications
- Thought leadership on LinkedIn or other platforms

For each fact:
1. Make it specific and compelling (not generic like \"experienced leader\")
2. Include context that shows why it matters
3. Focus on recent content (last 2-3 years preferred)
4. Emphasize AI, technology, and digital transformation topics

Return 2-4 facts as a numbered list. Each fact should be 1-2 sentences.
If you cannot find substantial information, say so clearly rather than making generic statements."
    )
}
