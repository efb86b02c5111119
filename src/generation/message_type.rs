//! Outreach message kinds and the guidance each one adds to the prompt.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// No traction in the account yet
    #[default]
    ColdOutreach,
    /// Invitation to a dinner, event or meeting
    InPersonAsk,
    /// Existing engagement, reaching higher up
    ExecutiveAlignment,
}

impl MessageType {
    /// Resolves a wire name. Unknown names fall back to cold outreach.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cold_outreach" => Self::ColdOutreach,
            "in_person_ask" => Self::InPersonAsk,
            "executive_alignment" => Self::ExecutiveAlignment,
            other => {
                debug!(message_type = other, "unknown message type, using cold_outreach");
                Self::ColdOutreach
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColdOutreach => "cold_outreach",
            Self::InPersonAsk => "in_person_ask",
            Self::ExecutiveAlignment => "executive_alignment",
        }
    }

    /// Type-specific writing instructions for the system prompt.
    pub fn instructions(self) -> &'static str {
        match self {
            Self::ColdOutreach => {
                "MESSAGE TYPE: Cold Outreach\n\
                 - Open with a hook tied to their work, award, initiative or company milestone\n\
                 - Establish credibility quickly with relevant customer proof\n\
                 - Close with a low-friction ask such as a short call this week\n\
                 - Tone: respectful, confident, peer-to-peer"
            }
            Self::InPersonAsk => {
                "MESSAGE TYPE: In-Person Ask\n\
                 - Lead with the invitation and why they specifically should attend\n\
                 - Frame it as a peer gathering, not a sales pitch\n\
                 - Include date, time and location when known\n\
                 - Close by offering to save them a seat\n\
                 - Tone: warm, personal, invitational"
            }
            Self::ExecutiveAlignment => {
                "MESSAGE TYPE: Executive Alignment\n\
                 - Reference the existing engagement with their team\n\
                 - Connect to board-level priorities or public initiatives\n\
                 - Mention use cases or pilots in progress\n\
                 - Close by proposing that assistants coordinate a meeting\n\
                 - Tone: executive peer, strategic, collaborative"
            }
        }
    }
}
