//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the response cache can hold
    pub max_cache_entries: usize,
    /// Default TTL in milliseconds for cached responses
    pub default_ttl_ms: u64,
    /// TTL in milliseconds for frequently-changing listing pages
    pub listing_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_CACHE_ENTRIES` - Maximum cached responses (default: 100)
    /// - `DEFAULT_TTL_MS` - Default response TTL in milliseconds (default: 300000, 5 minutes)
    /// - `LISTING_TTL_MS` - Listing-page TTL in milliseconds (default: 120000, 2 minutes)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            max_cache_entries: env::var("MAX_CACHE_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300_000),
            listing_ttl_ms: env::var("LISTING_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120_000),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cache_entries: 100,
            default_ttl_ms: 300_000,
            listing_ttl_ms: 120_000,
            server_port: 3000,
            cleanup_interval: 30,
        }
    }
}
