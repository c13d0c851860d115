//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including the
//! cache-before-storage path on reads and invalidation on writes.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use retail_pos::{
    api::create_router,
    report::{CategoryRow, PurchaseDetail, SaleDetail},
    storage::MemoryStore,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::with_defaults(MemoryStore::with_sample_data());
    create_router(state)
}

/// Builds an app around a deterministic two-category fixture.
fn create_fixture_app() -> Router {
    let mut store = MemoryStore::new();
    let now = Utc::now();

    store.add_category(CategoryRow {
        id: 1,
        name: "Beverages".to_string(),
        code: "BEV".to_string(),
        stock: 3,
        selling_price: 100.0,
    });
    store.add_category(CategoryRow {
        id: 2,
        name: "Snacks".to_string(),
        code: "SNK".to_string(),
        stock: 50,
        selling_price: 200.0,
    });
    store.add_purchase(PurchaseDetail {
        category_id: 1,
        quantity: 10,
        subtotal: 500.0,
        created_at: now - Duration::days(5),
        supplier: Some("Fresh Springs Co".to_string()),
    });
    store.add_sale(SaleDetail {
        category_id: 1,
        category_name: "Beverages".to_string(),
        quantity: 8,
        subtotal: 640.0,
        // "now" always falls inside today's window regardless of timezone
        created_at: now,
        user_id: Some(1),
    });
    store.add_sale(SaleDetail {
        category_id: 2,
        category_name: "Snacks".to_string(),
        quantity: 2,
        subtotal: 30.0,
        created_at: now - Duration::days(2),
        user_id: Some(2),
    });

    create_router(AppState::with_defaults(store))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let json = body_to_json(response.into_body()).await;
    (status, json)
}

// == Product Listing Tests ==

#[tokio::test]
async fn test_list_products_success() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/products?page=1&per_page=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"].as_u64().unwrap(), 1);
    assert_eq!(json["total"].as_u64().unwrap(), 2);
    assert!(json["data"].is_array());
}

#[tokio::test]
async fn test_list_products_second_read_is_cache_hit() {
    let app = create_test_app();

    let _ = get_json(&app, "/products?page=1&per_page=10").await;
    let _ = get_json(&app, "/products?page=1&per_page=10").await;

    let (_, stats) = get_json(&app, "/cache/stats").await;
    assert_eq!(stats["hits"].as_u64().unwrap(), 1);
    assert_eq!(stats["misses"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_list_products_distinct_pages_cached_separately() {
    let app = create_test_app();

    let _ = get_json(&app, "/products?page=1&per_page=1").await;
    let _ = get_json(&app, "/products?page=2&per_page=1").await;

    let (_, stats) = get_json(&app, "/cache/stats").await;
    // Two distinct keys: both reads were misses
    assert_eq!(stats["misses"].as_u64().unwrap(), 2);
    assert_eq!(stats["total_entries"].as_u64().unwrap(), 2);
}

#[tokio::test]
async fn test_list_products_no_cache_directive_bypasses_cache() {
    let app = create_test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/products?page=1&per_page=10")
                    .header("cache-control", "no-cache")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let (_, stats) = get_json(&app, "/cache/stats").await;
    // Neither request consulted or populated the cache
    assert_eq!(stats["hits"].as_u64().unwrap(), 0);
    assert_eq!(stats["misses"].as_u64().unwrap(), 0);
    assert_eq!(stats["total_entries"].as_u64().unwrap(), 0);
}

// == Product Write Tests ==

#[tokio::test]
async fn test_create_product_and_invalidate() {
    let app = create_test_app();

    // Prime the cache
    let (_, before) = get_json(&app, "/products?page=1&per_page=10").await;
    assert_eq!(before["total"].as_u64().unwrap(), 2);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Dish Soap","code":"HSH-001","category_id":3,"price":4.0,"stock":25}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_to_json(response.into_body()).await;
    assert_eq!(created["name"].as_str().unwrap(), "Dish Soap");

    // The cached page was invalidated, so the listing reflects the write
    let (_, after) = get_json(&app, "/products?page=1&per_page=10").await;
    assert_eq!(after["total"].as_u64().unwrap(), 3);
}

#[tokio::test]
async fn test_create_product_invalid_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"","code":"X","category_id":1,"price":1.0,"stock":1}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_update_product_success() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/products/1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"price":9.99}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["price"].as_f64().unwrap(), 9.99);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/products/9999")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"price":1.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_success() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/products/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, listing) = get_json(&app, "/products?page=1&per_page=10").await;
    assert_eq!(listing["total"].as_u64().unwrap(), 1);
}

// == Stock Report Tests ==

#[tokio::test]
async fn test_stock_report_shape_and_values() {
    let app = create_fixture_app();

    let (status, json) = get_json(&app, "/reports/stock").await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "overview",
        "stock_analysis",
        "top_by_value",
        "top_by_turnover",
        "low_stock_items",
        "slow_moving_items",
        "fast_moving_items",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }

    let records = json["stock_analysis"].as_array().unwrap();
    assert_eq!(records.len(), 2);

    let beverages = &records[0];
    assert_eq!(beverages["stock_status"].as_str().unwrap(), "critical");
    assert_eq!(beverages["average_purchase_price"].as_f64().unwrap(), 50.0);
    assert_eq!(beverages["average_stock"].as_f64().unwrap(), 6.5);
    assert!((beverages["turnover_rate"].as_f64().unwrap() - 123.08).abs() < 0.01);

    let snacks = &records[1];
    assert_eq!(snacks["stock_status"].as_str().unwrap(), "good");
    assert_eq!(snacks["total_purchased"].as_i64().unwrap(), 0);
    assert_eq!(snacks["average_purchase_price"].as_f64().unwrap(), 0.0);

    let overview = &json["overview"];
    assert_eq!(overview["critical_count"].as_u64().unwrap(), 1);
    assert_eq!(overview["good_count"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_stock_report_is_cached() {
    let app = create_fixture_app();

    let _ = get_json(&app, "/reports/stock").await;
    let _ = get_json(&app, "/reports/stock").await;

    let (_, stats) = get_json(&app, "/cache/stats").await;
    assert_eq!(stats["hits"].as_u64().unwrap(), 1);
    assert_eq!(stats["misses"].as_u64().unwrap(), 1);
}

// == Dashboard Tests ==

#[tokio::test]
async fn test_category_sales_today_excludes_old_rows() {
    let app = create_fixture_app();

    let (status, json) = get_json(&app, "/dashboard/category-sales?time=today").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["time_filter"].as_str().unwrap(), "today");
    assert!(json.get("date_range").is_some());

    // Only the just-recorded sale falls in today's window
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["category_id"].as_i64().unwrap(), 1);
    assert_eq!(data[0]["total_revenue"].as_f64().unwrap(), 640.0);
}

#[tokio::test]
async fn test_category_sales_all_includes_everything() {
    let app = create_fixture_app();

    let (status, json) = get_json(&app, "/dashboard/category-sales?time=all").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["date_range"].is_null());

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    // Sorted descending by revenue
    assert_eq!(data[0]["category_id"].as_i64().unwrap(), 1);
    assert_eq!(data[1]["category_id"].as_i64().unwrap(), 2);
}

#[tokio::test]
async fn test_category_sales_actor_restriction() {
    let app = create_fixture_app();

    let (status, json) = get_json(&app, "/dashboard/category-sales?time=all&user_id=2").await;

    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["category_id"].as_i64().unwrap(), 2);
    assert_eq!(data[0]["total_revenue"].as_f64().unwrap(), 30.0);
}

#[tokio::test]
async fn test_category_sales_unknown_keyword() {
    let app = create_fixture_app();

    let (status, json) = get_json(&app, "/dashboard/category-sales?time=fortnight").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == Stats and Health Tests ==

#[tokio::test]
async fn test_cache_stats_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/cache/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"].as_u64().unwrap(), 0);
    assert_eq!(json["misses"].as_u64().unwrap(), 0);
    assert!(json.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/products")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 422 for JSON parsing errors by default
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}
