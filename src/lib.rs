//! Exec Notes - prospect bio summaries and research for sales outreach
//!
//! Turns LinkedIn bios into one validated fact, researches prospects with a
//! web-search model and drafts outreach emails. Bios and research sit behind
//! bounded LRU (and TTL) caches.

pub mod api;
pub mod bio;
pub mod cache;
pub mod companies;
pub mod config;
pub mod error;
pub mod feedback;
pub mod generation;
pub mod llm;
pub mod models;
pub mod research;
pub mod tasks;
pub mod text;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
