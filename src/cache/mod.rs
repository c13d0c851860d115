//! Cache Module
//!
//! Provides an in-memory response cache with TTL expiry and
//! oldest-inserted eviction, plus caller-side key and policy helpers.

mod entry;
mod keys;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{is_cacheable, response_key};
pub use order::InsertionTracker;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default maximum number of cached responses
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default TTL for cached responses (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Shorter TTL for frequently-changing listing pages (2 minutes)
pub const LISTING_TTL_MS: u64 = 2 * 60 * 1000;
