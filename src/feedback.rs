//! Feedback Module
//!
//! Stores user ratings of generated emails as one JSON file per submission.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Positive,
    Negative,
}

/// One submission, written to disk as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub feedback_type: FeedbackKind,
    /// The email as it was generated
    pub original_output: Value,
    /// The user's rewrite, if any
    #[serde(default)]
    pub improved_version: Option<String>,
    /// Generation metadata echoed back by the client
    pub metadata: Value,
    /// Client-side ISO 8601 timestamp
    pub timestamp: String,
}

// == Feedback Sink ==
#[derive(Debug, Clone)]
pub struct FeedbackSink {
    dir: PathBuf,
}

impl FeedbackSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `record` to `feedback_<timestamp>_<id>.json`, creating the
    /// directory on first use. Returns the file path.
    pub async fn save(&self, record: &FeedbackRecord) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let id = Uuid::new_v4().simple().to_string();
        let file_name = format!(
            "feedback_{}_{}.json",
            Utc::now().format("%Y%m%d_%H%M%S"),
            &id[..8]
        );
        let path = self.dir.join(file_name);

        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&path, json).await?;

        info!(kind = ?record.feedback_type, path = %path.display(), "feedback saved");
        Ok(path)
    }
}
