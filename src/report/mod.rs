//! Report Module
//!
//! Pure stock and sales aggregation: raw rows in, computed records out.
//! The HTTP layer owns fetching rows and serving the results as JSON.

mod sales;
mod stock;
mod types;

// Re-export public types
pub use sales::{compute_sales_by_category, local_midnight, TimeFilter};
pub use stock::{compute_stock_analysis, FAST_TURNOVER_MIN, SLOW_TURNOVER_MAX, TOP_ENTRIES};
pub use types::{
    CategoryRow, CategorySalesBucket, CategoryStockRecord, PurchaseDetail, SaleDetail,
    StockAnalysisReport, StockOverview, StockStatus,
};
