//! Generation Module
//!
//! Outreach email generation from prospect details and a message type.

mod generator;
mod message_type;
mod prompts;
mod reply;

pub use generator::{
    EmailGenerator, EmailMetadata, EmailRequest, GeneratedEmail, GenerationError,
    DEFAULT_MANAGER_NAME,
};
pub use message_type::MessageType;
pub use prompts::{email_system_prompt, email_user_prompt};
pub use reply::{parse_email_draft, parse_json_reply, EmailDraft};
