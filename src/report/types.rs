//! Report Types Module
//!
//! Row inputs and computed records for the stock and sales reports.
//! Everything here is plain data: the engine never touches storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Input Rows ==
/// A product category row as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub code: String,
    /// Authoritative current stock count
    pub stock: i64,
    pub selling_price: f64,
}

/// A purchase line item tagged with its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDetail {
    pub category_id: i64,
    pub quantity: i64,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
    /// Linked supplier name, when the purchase row carries one
    pub supplier: Option<String>,
}

/// A sale line item tagged with its category and the cashier who rang it up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetail {
    pub category_id: i64,
    pub category_name: String,
    pub quantity: i64,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
    /// Transaction owner; used to restrict dashboards for non-privileged callers
    pub user_id: Option<i64>,
}

// == Stock Status ==
/// Categorical stock level derived from absolute count thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Good,
    High,
}

impl StockStatus {
    /// Classifies a stock count.
    ///
    /// Thresholds are fixed policy, checked in order so boundary values
    /// resolve deterministically: 5 is critical, 20 is low, 100 is high.
    pub fn classify(stock: i64) -> Self {
        if stock <= 5 {
            StockStatus::Critical
        } else if stock <= 20 {
            StockStatus::Low
        } else if stock >= 100 {
            StockStatus::High
        } else {
            StockStatus::Good
        }
    }
}

// == Computed Records ==
/// Per-category stock analysis, recomputed from scratch on every request.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStockRecord {
    pub category_id: i64,
    pub name: String,
    pub code: String,
    pub current_stock: i64,
    pub total_purchased: i64,
    pub total_sold: i64,
    /// current_stock x selling_price
    pub stock_value: f64,
    /// Total purchase value over total purchased quantity; 0 when nothing purchased
    pub average_purchase_price: f64,
    /// (total_purchased + current_stock) / 2
    pub average_stock: f64,
    /// total_sold / average_stock * 100; 0 when average stock is 0
    pub turnover_rate: f64,
    pub stock_status: StockStatus,
    pub last_purchase: Option<DateTime<Utc>>,
    pub last_sale: Option<DateTime<Utc>>,
}

/// Global summary across all categories.
#[derive(Debug, Clone, Serialize)]
pub struct StockOverview {
    pub total_categories: usize,
    pub critical_count: usize,
    pub low_count: usize,
    pub good_count: usize,
    pub high_count: usize,
    pub total_stock_value: f64,
}

/// Full stock-analysis report: per-category records plus ranked views.
#[derive(Debug, Clone, Serialize)]
pub struct StockAnalysisReport {
    pub overview: StockOverview,
    pub stock_analysis: Vec<CategoryStockRecord>,
    pub top_by_value: Vec<CategoryStockRecord>,
    pub top_by_turnover: Vec<CategoryStockRecord>,
    pub low_stock_items: Vec<CategoryStockRecord>,
    pub slow_moving_items: Vec<CategoryStockRecord>,
    pub fast_moving_items: Vec<CategoryStockRecord>,
}

/// Per-category sales aggregate over a filtered time window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySalesBucket {
    pub category_id: i64,
    pub category_name: String,
    /// Number of contributing line items
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_revenue: f64,
}
