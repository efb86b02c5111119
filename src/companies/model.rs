//! Company record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_INITIATIVES: usize = 3;
pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_INDUSTRY_CHARS: usize = 100;

/// A target company and the business initiatives worth referencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub initiatives: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// On-disk layout of the company file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyFile {
    #[serde(default)]
    pub companies: Vec<Company>,
}
