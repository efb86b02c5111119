//! Research Module
//!
//! Search-augmented prospect research, findings parsing and result types.

mod findings;
mod prompts;
mod researcher;
mod result;

pub use findings::{parse_findings, MAX_FINDINGS};
pub use prompts::{research_user_prompt, RESEARCH_SYSTEM_PROMPT};
pub use researcher::ProspectResearcher;
pub use result::{Confidence, ResearchFinding, ResearchResult};
