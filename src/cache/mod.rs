//! Cache Module
//!
//! Bounded in-memory caching with LRU eviction and optional TTL expiry.

mod clock;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{BoundedCache, SharedCache};
