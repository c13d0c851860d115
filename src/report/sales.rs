//! Sales Bucketing Module
//!
//! Buckets sale line items by category within a caller-chosen time
//! window, optionally restricted to one actor's transactions. Who counts
//! as privileged is decided upstream; this engine only applies the
//! restriction it is handed.

use std::collections::HashMap;

use chrono::{DateTime, Local, Months, NaiveTime, Utc};

use crate::report::{CategorySalesBucket, SaleDetail};

// == Time Filter ==
/// Keyword selecting the reporting window for the sales dashboard.
///
/// All windows are half-open `[start, end)` intervals anchored at the
/// caller's local midnight; `All` disables date filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Today,
    Yesterday,
    Week,
    Month,
    Year,
    All,
}

impl TimeFilter {
    /// Parses a query-string keyword. Returns None for unknown keywords.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "today" => Some(TimeFilter::Today),
            "yesterday" => Some(TimeFilter::Yesterday),
            "week" => Some(TimeFilter::Week),
            "month" => Some(TimeFilter::Month),
            "year" => Some(TimeFilter::Year),
            "all" => Some(TimeFilter::All),
            _ => None,
        }
    }

    /// Returns the keyword form, for echoing back in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Today => "today",
            TimeFilter::Yesterday => "yesterday",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        }
    }

    /// Computes the half-open `[start, end)` interval for this filter,
    /// anchored at the given midnight instant.
    ///
    /// Returns None for `All`, which disables date filtering.
    pub fn date_range(
        &self,
        midnight: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let day = chrono::Duration::days(1);
        match self {
            TimeFilter::Today => Some((midnight, midnight + day)),
            TimeFilter::Yesterday => Some((midnight - day, midnight)),
            TimeFilter::Week => Some((midnight - chrono::Duration::days(7), midnight + day)),
            TimeFilter::Month => Some((
                midnight.checked_sub_months(Months::new(1)).unwrap_or(midnight),
                midnight + day,
            )),
            TimeFilter::Year => Some((
                midnight.checked_sub_months(Months::new(12)).unwrap_or(midnight),
                midnight + day,
            )),
            TimeFilter::All => None,
        }
    }
}

/// Returns the caller-local midnight of the current day as a UTC instant.
pub fn local_midnight() -> DateTime<Utc> {
    let now = Local::now();
    now.with_time(NaiveTime::MIN)
        .single()
        .unwrap_or(now)
        .with_timezone(&Utc)
}

// == Sales By Category ==
/// Groups sale line items by category and accumulates count, quantity,
/// and revenue, sorted descending by revenue.
///
/// # Arguments
/// * `rows` - Sale detail rows in arbitrary order
/// * `date_range` - Half-open `[start, end)` window; None includes everything
/// * `actor` - When set, only rows owned by this user id are counted
pub fn compute_sales_by_category(
    rows: &[SaleDetail],
    date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    actor: Option<i64>,
) -> Vec<CategorySalesBucket> {
    let mut buckets: HashMap<i64, CategorySalesBucket> = HashMap::new();

    for row in rows {
        if let Some((start, end)) = date_range {
            if row.created_at < start || row.created_at >= end {
                continue;
            }
        }

        if let Some(actor_id) = actor {
            if row.user_id != Some(actor_id) {
                continue;
            }
        }

        let bucket = buckets
            .entry(row.category_id)
            .or_insert_with(|| CategorySalesBucket {
                category_id: row.category_id,
                category_name: row.category_name.clone(),
                item_count: 0,
                total_quantity: 0,
                total_revenue: 0.0,
            });

        bucket.item_count += 1;
        bucket.total_quantity += row.quantity;
        bucket.total_revenue += row.subtotal;
    }

    let mut result: Vec<CategorySalesBucket> = buckets.into_values().collect();
    result.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    result
}
