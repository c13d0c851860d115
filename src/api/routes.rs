//! API Routes
//!
//! Configures the Axum router with all POS endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, category_sales_handler, create_product_handler, delete_product_handler,
    health_handler, list_products_handler, stock_report_handler, update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - Paginated product listing (cached)
/// - `POST /products` - Create a product (invalidates cached pages)
/// - `PUT /products/:id` - Update a product (invalidates cached pages)
/// - `DELETE /products/:id` - Delete a product (invalidates cached pages)
/// - `GET /reports/stock` - Full stock-analysis report (cached)
/// - `GET /dashboard/category-sales` - Sales by category for a time window
/// - `GET /cache/stats` - Response-cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products", post(create_product_handler))
        .route("/products/:id", put(update_product_handler))
        .route("/products/:id", delete(delete_product_handler))
        .route("/reports/stock", get(stock_report_handler))
        .route("/dashboard/category-sales", get(category_sales_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
