//! API Handlers
//!
//! HTTP request handlers for the POS endpoints. Read handlers consult the
//! response cache before touching storage; write handlers invalidate the
//! cached pages of the resource they mutate.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{is_cacheable, response_key, ResponseCache, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS, LISTING_TTL_MS};
use crate::error::{AppError, Result};
use crate::models::{
    CacheStatsResponse, CategorySalesQuery, CategorySalesResponse, CreateProductRequest,
    DateRange, HealthResponse, ListProductsQuery, MessageResponse, ProductPage,
    UpdateProductRequest,
};
use crate::report::{
    compute_sales_by_category, compute_stock_analysis, local_midnight, TimeFilter,
};
use crate::storage::{MemoryStore, Product};

/// Cache key prefix for product listing pages
const PRODUCTS_PREFIX: &str = "products";

/// Cache key prefix for reports
const REPORTS_PREFIX: &str = "reports";

/// Application state shared across all handlers.
///
/// The cache and the store are injected explicitly rather than living in
/// module-level globals, so each test can construct an isolated instance.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Thread-safe storage
    pub store: Arc<RwLock<MemoryStore>>,
    /// TTL applied to cached listing pages, in milliseconds
    pub listing_ttl_ms: u64,
}

impl AppState {
    /// Creates a new AppState with the given cache and store.
    pub fn new(cache: ResponseCache, store: MemoryStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            store: Arc::new(RwLock::new(store)),
            listing_ttl_ms: LISTING_TTL_MS,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config, store: MemoryStore) -> Self {
        let cache = ResponseCache::new(config.max_cache_entries, config.default_ttl_ms);
        Self {
            cache: Arc::new(RwLock::new(cache)),
            store: Arc::new(RwLock::new(store)),
            listing_ttl_ms: config.listing_ttl_ms,
        }
    }

    /// Creates an AppState with default cache parameters, for tests.
    pub fn with_defaults(store: MemoryStore) -> Self {
        Self::new(ResponseCache::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS), store)
    }
}

/// Handler for GET /products
///
/// Cached listing: builds a key from the normalized query, serves the
/// cached page when fresh, and writes the computed page back with the
/// short listing TTL on a miss. A request carrying a do-not-cache
/// directive bypasses the cache entirely.
pub async fn list_products_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Value>> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);

    let mut pairs = vec![
        ("page".to_string(), page.to_string()),
        ("per_page".to_string(), per_page.to_string()),
    ];
    if let Some(search) = &query.search {
        pairs.push(("search".to_string(), search.clone()));
    }
    let key = response_key(PRODUCTS_PREFIX, "/products", &pairs);

    let cacheable = is_cacheable(&method, &headers);
    if cacheable {
        let mut cache = state.cache.write().await;
        if let Some(cached) = cache.get(&key) {
            debug!(key = %key, "product listing served from cache");
            return Ok(Json(cached));
        }
    }

    let (items, total) = {
        let store = state.store.read().await;
        store.list_products(query.search.as_deref(), page, per_page)
    };

    let body = serde_json::to_value(ProductPage {
        data: items,
        page,
        per_page,
        total,
    })
    .map_err(|e| AppError::Internal(e.to_string()))?;

    if cacheable {
        let mut cache = state.cache.write().await;
        cache.set(key, body.clone(), Some(state.listing_ttl_ms));
    }

    Ok(Json(body))
}

/// Handler for POST /products
///
/// Inserts a product and invalidates all cached product pages.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let product = {
        let mut store = state.store.write().await;
        store.insert_product(req.into_new_product())
    };

    invalidate_products(&state).await;

    Ok(Json(product))
}

/// Handler for PUT /products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let product = {
        let mut store = state.store.write().await;
        store.update_product(id, req.into_changes())?
    };

    invalidate_products(&state).await;

    Ok(Json(product))
}

/// Handler for DELETE /products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    {
        let mut store = state.store.write().await;
        store.delete_product(id)?;
    }

    invalidate_products(&state).await;

    Ok(Json(MessageResponse::new(format!(
        "Product {} deleted successfully",
        id
    ))))
}

/// Drops every cached product listing page after a successful write.
async fn invalidate_products(state: &AppState) {
    let mut cache = state.cache.write().await;
    let removed = cache.invalidate_prefix(PRODUCTS_PREFIX);
    if removed > 0 {
        debug!(removed, "invalidated cached product pages");
    }
}

/// Handler for GET /reports/stock
///
/// Returns the full stock-analysis report, memoized for the default TTL.
pub async fn stock_report_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let key = response_key(REPORTS_PREFIX, "/reports/stock", &[]);

    let cacheable = is_cacheable(&method, &headers);
    if cacheable {
        let mut cache = state.cache.write().await;
        if let Some(cached) = cache.get(&key) {
            debug!("stock report served from cache");
            return Ok(Json(cached));
        }
    }

    let report = {
        let store = state.store.read().await;
        compute_stock_analysis(
            store.categories(),
            store.purchase_details(),
            store.sale_details(),
        )
    };

    let body = serde_json::to_value(&report).map_err(|e| AppError::Internal(e.to_string()))?;

    if cacheable {
        let mut cache = state.cache.write().await;
        cache.set(key, body.clone(), None);
    }

    Ok(Json(body))
}

/// Handler for GET /dashboard/category-sales
///
/// Buckets sales by category within the requested time window. Not
/// cached: the window is anchored at the current day and the row set may
/// be restricted per caller.
pub async fn category_sales_handler(
    State(state): State<AppState>,
    Query(query): Query<CategorySalesQuery>,
) -> Result<Json<CategorySalesResponse>> {
    let keyword = query.time.as_deref().unwrap_or("all");
    let filter = TimeFilter::parse(keyword).ok_or_else(|| {
        AppError::InvalidRequest(format!(
            "Unknown time filter '{}' (expected today, yesterday, week, month, year, or all)",
            keyword
        ))
    })?;

    let range = filter.date_range(local_midnight());

    let data = {
        let store = state.store.read().await;
        compute_sales_by_category(store.sale_details(), range, query.user_id)
    };

    Ok(Json(CategorySalesResponse {
        data,
        time_filter: filter.as_str().to_string(),
        date_range: range.map(|(start, end)| DateRange { start, end }),
    }))
}

/// Handler for GET /cache/stats
///
/// Returns current response-cache statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(CacheStatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
