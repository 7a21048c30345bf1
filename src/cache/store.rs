//! Response Cache Module
//!
//! Bounded in-memory store of upstream responses with fixed-TTL expiration
//! and least-recently-used eviction.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// Caches computed responses keyed by request shape.
///
/// Expired entries are removed lazily on lookup; a periodic background sweep
/// handles keys that are never queried again. When the cache is at capacity,
/// inserting a new key evicts the least recently accessed entry.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied to every entry
    ttl_seconds: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl_seconds` - TTL applied to every stored response
    pub fn new(max_entries: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_seconds,
        }
    }

    // == Get ==
    /// Looks up a cached response.
    ///
    /// Returns the stored value if present and unexpired. An expired entry is
    /// removed and reported as absent. Absence is a normal outcome, not an
    /// error.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let is_expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if is_expired {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            None
        } else if let Some(entry) = self.entries.get_mut(key) {
            entry.touch();
            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Insert ==
    /// Stores a response with expiry = now + TTL.
    ///
    /// Overwrites any existing entry for the key unconditionally. If the cache
    /// is at capacity, the least recently accessed entry is evicted first.
    pub fn insert(&mut self, key: String, value: Value) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.least_recently_used() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries
            .insert(key, CacheEntry::new(value, self.ttl_seconds));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the entry with the oldest last-access timestamp.
    fn least_recently_used(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone())
    }
}
