//! Stock Analysis Module
//!
//! Pure computation turning raw category/purchase/sale rows into
//! per-category stock records, a global overview, and ranked views.
//! No I/O and no state: everything is recomputed per request.

use crate::report::{
    CategoryRow, CategoryStockRecord, PurchaseDetail, SaleDetail, StockAnalysisReport,
    StockOverview, StockStatus,
};

// == Policy Constants ==
/// Maximum entries in each ranked view
pub const TOP_ENTRIES: usize = 10;

/// Turnover rate below which a category counts as slow-moving
pub const SLOW_TURNOVER_MAX: f64 = 10.0;

/// Turnover rate above which a category counts as fast-moving
pub const FAST_TURNOVER_MIN: f64 = 50.0;

// == Stock Analysis ==
/// Computes the full stock-analysis report from raw rows.
///
/// Detail rows are filtered per category id, so a row referencing an
/// unknown category contributes to nothing and never raises. Every
/// division is guarded: an empty denominator yields `0`, never NaN.
pub fn compute_stock_analysis(
    categories: &[CategoryRow],
    purchases: &[PurchaseDetail],
    sales: &[SaleDetail],
) -> StockAnalysisReport {
    let records: Vec<CategoryStockRecord> = categories
        .iter()
        .map(|category| analyze_category(category, purchases, sales))
        .collect();

    let overview = build_overview(&records);

    let mut top_by_value = records.clone();
    top_by_value.sort_by(|a, b| b.stock_value.total_cmp(&a.stock_value));
    top_by_value.truncate(TOP_ENTRIES);

    let mut top_by_turnover = records.clone();
    top_by_turnover.sort_by(|a, b| b.turnover_rate.total_cmp(&a.turnover_rate));
    top_by_turnover.truncate(TOP_ENTRIES);

    let mut low_stock_items = records.clone();
    low_stock_items.sort_by_key(|r| r.current_stock);
    low_stock_items.truncate(TOP_ENTRIES);

    // Slow movers must actually hold stock: a sold-out category with a
    // zero turnover rate is not "slow", it is empty.
    let mut slow_moving_items: Vec<CategoryStockRecord> = records
        .iter()
        .filter(|r| r.turnover_rate < SLOW_TURNOVER_MAX && r.current_stock > 0)
        .cloned()
        .collect();
    slow_moving_items.sort_by(|a, b| a.turnover_rate.total_cmp(&b.turnover_rate));
    slow_moving_items.truncate(TOP_ENTRIES);

    let mut fast_moving_items: Vec<CategoryStockRecord> = records
        .iter()
        .filter(|r| r.turnover_rate > FAST_TURNOVER_MIN)
        .cloned()
        .collect();
    fast_moving_items.sort_by(|a, b| b.turnover_rate.total_cmp(&a.turnover_rate));
    fast_moving_items.truncate(TOP_ENTRIES);

    StockAnalysisReport {
        overview,
        stock_analysis: records,
        top_by_value,
        top_by_turnover,
        low_stock_items,
        slow_moving_items,
        fast_moving_items,
    }
}

// == Per-Category Analysis ==
/// Derives one category's stock record from its matching detail rows.
fn analyze_category(
    category: &CategoryRow,
    purchases: &[PurchaseDetail],
    sales: &[SaleDetail],
) -> CategoryStockRecord {
    let mut total_purchased: i64 = 0;
    let mut purchase_value: f64 = 0.0;
    let mut last_purchase = None;

    for row in purchases.iter().filter(|p| p.category_id == category.id) {
        total_purchased += row.quantity;
        purchase_value += row.subtotal;
        if last_purchase.map_or(true, |ts| row.created_at > ts) {
            last_purchase = Some(row.created_at);
        }
    }

    let mut total_sold: i64 = 0;
    let mut last_sale = None;

    for row in sales.iter().filter(|s| s.category_id == category.id) {
        total_sold += row.quantity;
        if last_sale.map_or(true, |ts| row.created_at > ts) {
            last_sale = Some(row.created_at);
        }
    }

    let stock_value = category.stock as f64 * category.selling_price;

    let average_purchase_price = if total_purchased > 0 {
        purchase_value / total_purchased as f64
    } else {
        0.0
    };

    let average_stock = (total_purchased as f64 + category.stock as f64) / 2.0;

    let turnover_rate = if average_stock > 0.0 {
        total_sold as f64 / average_stock * 100.0
    } else {
        0.0
    };

    CategoryStockRecord {
        category_id: category.id,
        name: category.name.clone(),
        code: category.code.clone(),
        current_stock: category.stock,
        total_purchased,
        total_sold,
        stock_value: round2(stock_value),
        average_purchase_price: round2(average_purchase_price),
        average_stock: round2(average_stock),
        turnover_rate: round2(turnover_rate),
        stock_status: StockStatus::classify(category.stock),
        last_purchase,
        last_sale,
    }
}

// == Overview ==
/// Counts records per status bucket and sums total stock value.
fn build_overview(records: &[CategoryStockRecord]) -> StockOverview {
    let mut overview = StockOverview {
        total_categories: records.len(),
        critical_count: 0,
        low_count: 0,
        good_count: 0,
        high_count: 0,
        total_stock_value: 0.0,
    };

    for record in records {
        match record.stock_status {
            StockStatus::Critical => overview.critical_count += 1,
            StockStatus::Low => overview.low_count += 1,
            StockStatus::Good => overview.good_count += 1,
            StockStatus::High => overview.high_count += 1,
        }
        overview.total_stock_value += record.stock_value;
    }

    overview.total_stock_value = round2(overview.total_stock_value);
    overview
}

/// Rounds to two decimal places, matching the report's presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
