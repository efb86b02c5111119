//! Prompt text for bio fact extraction.

pub const BIO_SYSTEM_PROMPT: &str = "\
You are an expert at extracting the most interesting and relevant facts from executive bios.
Read a LinkedIn bio and extract ONE compelling fact that would be useful for personalized outreach.

Focus on:
- Unique career achievements or transitions
- Interesting background or origin story
- Notable companies, roles or initiatives they have led
- Relevant interests, expertise or geographic connections

Avoid generic statements, buzzwords without substance, multiple facts and long explanations.

Output format: one sentence, 15-30 words, factual and specific.";

/// User prompt embedding optional prospect context and the normalized bio.
pub fn bio_user_prompt(bio: &str, name: Option<&str>, title: Option<&str>) -> String {
    let mut prompt = String::new();
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        prompt.push_str(&format!("Prospect: {name}\n"));
    }
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("Title: {title}\n"));
    }

    prompt.push_str(&format!(
        "\nBio text:\n{bio}\n\n\
         Extract ONE compelling unique fact as a single sentence (15-30 words).\n\
         Return ONLY the sentence, no explanation or preamble."
    ));
    prompt
}
