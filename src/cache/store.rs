//! Cache Store Module
//!
//! Fixed-capacity cache combining HashMap storage with LRU tracking and an
//! optional TTL.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, LruTracker, SystemClock};

/// A cache shared between request handlers and background tasks.
pub type SharedCache<V> = Arc<RwLock<BoundedCache<V>>>;

// == Bounded Cache ==
/// Recency-ordered store holding at most `capacity` entries.
///
/// Reads and writes both refresh recency. When a new key arrives at capacity
/// the least recently used entry is evicted first. With a TTL, entries older
/// than the TTL are dropped when read and count as misses.
#[derive(Debug)]
pub struct BoundedCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    lru: LruTracker,
    stats: CacheStats,
    capacity: usize,
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> BoundedCache<V> {
    // == Constructors ==
    /// Creates a cache without expiry.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, None, Arc::new(SystemClock))
    }

    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, Some(ttl), Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`. A capacity of zero is
    /// raised to one.
    pub fn with_clock(capacity: usize, ttl: Option<Duration>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl,
            clock,
        }
    }

    /// Wraps the cache for sharing across tasks.
    pub fn shared(self) -> SharedCache<V> {
        Arc::new(RwLock::new(self))
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// A hit refreshes recency. An expired entry is removed and reported as a
    /// miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl, now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_miss();
            debug!(key, "cache entry expired");
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Put ==
    /// Inserts or overwrites `key`, stamping it with the current time.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "cache full, evicted least recently used entry");
            }
        }

        let entry = CacheEntry::new(value, self.clock.now());
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Presence check that neither touches recency nor counts as a lookup.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Purge Expired ==
    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = self.clock.now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }
        expired.len()
    }

    // == Clear ==
    /// Drops all entries. Counters are left untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }
}
