//! Cache Entry Module
//!
//! Defines the structure for individual cached responses with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cached response body with its freshness window.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response payload
    pub value: Value,
    /// Timestamp the entry was written (Unix milliseconds)
    pub stored_at: u64,
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The response payload to store
    /// * `ttl_ms` - Freshness window in milliseconds
    pub fn new(value: Value, ttl_ms: u64) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has gone stale.
    ///
    /// An entry is readable only while `now - stored_at <= ttl_ms`; once
    /// that window has elapsed it must not be returned again.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms().saturating_sub(self.stored_at) > self.ttl_ms
    }

    // == Age ==
    /// Returns the age of the entry in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
