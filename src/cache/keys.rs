//! Cache Key and Policy Module
//!
//! Key construction and cache-applicability decisions live with the
//! caller, not the store: the store only sees opaque strings.

use axum::http::{header, HeaderMap, Method};

// == Key Construction ==
/// Builds a cache key from a logical resource name, the request path, and
/// the query parameters.
///
/// Query pairs are sorted before joining so that the same filter and
/// pagination combination always maps to the same key regardless of
/// parameter order, and distinct combinations never collide.
pub fn response_key(resource: &str, path: &str, query: &[(String, String)]) -> String {
    let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    pairs.sort();

    format!("{}:{}?{}", resource, path, pairs.join("&"))
}

// == Applicability Policy ==
/// Decides whether a request is eligible for the response cache.
///
/// Only idempotent reads qualify, and an explicit do-not-cache directive
/// always wins: such a request is neither served from cache nor written
/// back into it.
pub fn is_cacheable(method: &Method, headers: &HeaderMap) -> bool {
    if method != Method::GET {
        return false;
    }

    if let Some(cache_control) = headers.get(header::CACHE_CONTROL) {
        if let Ok(value) = cache_control.to_str() {
            let value = value.to_ascii_lowercase();
            if value.contains("no-cache") || value.contains("no-store") {
                return false;
            }
        }
    }

    true
}
