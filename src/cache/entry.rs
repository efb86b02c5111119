//! Cache Entry Module
//!
//! A stored payload together with the time it was written.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// A single cached payload keyed elsewhere by its fingerprint.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// When the entry was inserted or last overwritten
    pub inserted_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, inserted_at: DateTime<Utc>) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Time elapsed since insertion, as seen at `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.inserted_at
    }

    // == Is Expired ==
    /// Checks the entry against an optional TTL.
    ///
    /// An entry is valid while `now - inserted_at < ttl`, so it expires at the
    /// exact moment the full TTL has elapsed. Without a TTL it never expires.
    pub fn is_expired(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> bool {
        match ttl {
            Some(ttl) => self.age(now) >= ttl,
            None => false,
        }
    }

    // == Time To Live ==
    /// Remaining lifetime, clamped at zero. `None` when there is no TTL.
    pub fn ttl_remaining(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> Option<Duration> {
        ttl.map(|ttl| {
            let remaining = ttl - self.age(now);
            if remaining > Duration::zero() {
                remaining
            } else {
                Duration::zero()
            }
        })
    }
}
