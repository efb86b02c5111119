//! Cache key derivation.
//!
//! Keys are lowercase hex SHA-256 digests over text and context fields joined
//! by the ASCII unit separator, which does not occur in names, titles or
//! bios.

use sha2::{Digest, Sha256};

const FIELD_SEPARATOR: &str = "\u{1f}";

/// Fingerprint of already-normalized text plus context fields.
///
/// Every field takes part, empty ones included, so `["", "CTO"]` and
/// `["CTO", ""]` yield different keys.
pub fn derive_key(normalized_text: &str, context: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_text.as_bytes());
    for field in context {
        hasher.update(FIELD_SEPARATOR.as_bytes());
        hasher.update(field.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Key for a bio summary. Missing name or title hash as empty strings.
pub fn bio_key(normalized_bio: &str, name: Option<&str>, title: Option<&str>) -> String {
    derive_key(normalized_bio, &[name.unwrap_or(""), title.unwrap_or("")])
}

/// Key for prospect research: one slot per person and company, compared
/// case-insensitively and ignoring surrounding whitespace.
pub fn research_key(name: &str, company: &str) -> String {
    derive_key(
        &name.trim().to_lowercase(),
        &[&company.trim().to_lowercase()],
    )
}
