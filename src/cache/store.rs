//! Response Cache Store Module
//!
//! Bounded TTL key-value store used to memoize read responses for a short
//! window, with explicit invalidation on writes. Entries hold arbitrary
//! JSON payloads; keys encode the resource, path, and query so distinct
//! filter/pagination combinations never collide.
//!
//! The store is not a source of truth: it is rebuilt empty on restart and
//! tolerates a few minutes of staleness by design.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, InsertionTracker};

// == Response Cache ==
/// Bounded in-memory response cache with TTL expiry and oldest-inserted eviction.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion-order tracker driving eviction
    order: InsertionTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    default_ttl_ms: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `default_ttl_ms` - Default TTL in milliseconds for entries without explicit TTL
    pub fn new(max_entries: usize, default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a payload under `key` with an optional TTL in milliseconds.
    ///
    /// Overwriting an existing key replaces the payload and restarts its
    /// freshness window but keeps its eviction position. Inserting a NEW
    /// key while at capacity first evicts the oldest-inserted entry, so
    /// the store never exceeds `max_entries`.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The response payload
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the default if None)
    pub fn set(&mut self, key: String, value: Value, ttl_ms: Option<u64>) {
        let is_overwrite = self.entries.contains_key(&key);

        // Evict oldest-inserted entry when inserting a new key at capacity
        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        self.entries.insert(key.clone(), CacheEntry::new(value, effective_ttl));
        self.order.record(&key);

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Returns None on a miss: the key is absent, or present but expired.
    /// Reading an expired entry deletes it. A miss is normal control
    /// flow, never an error.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key, unconditionally.
    ///
    /// Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Invalidate Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Write endpoints use this to drop all cached pages of the resource
    /// they just mutated. Returns the number of entries removed.
    pub fn invalidate_prefix(&mut self, prefix: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();

        let count = matching.len();
        for key in matching {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
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
            self.order.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
