//! Text Module
//!
//! Input normalization and cache fingerprinting shared by the services.

mod fingerprint;
mod normalize;

pub use fingerprint::{bio_key, derive_key, research_key};
pub use normalize::truncate_at_sentence;
