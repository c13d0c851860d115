//! Request DTOs for the POS API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::storage::{NewProduct, ProductChanges};

/// Request body for creating a product (POST /products)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub code: String,
    pub category_id: i64,
    pub price: f64,
    pub stock: i64,
}

impl CreateProductRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.code.trim().is_empty() {
            return Some("Product code cannot be empty".to_string());
        }
        if self.price < 0.0 {
            return Some("Price cannot be negative".to_string());
        }
        if self.stock < 0 {
            return Some("Stock cannot be negative".to_string());
        }
        None
    }

    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            code: self.code,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Request body for updating a product (PUT /products/:id)
///
/// All fields optional; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category_id: Option<i64>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl UpdateProductRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Some("Product name cannot be empty".to_string());
            }
        }
        if let Some(price) = self.price {
            if price < 0.0 {
                return Some("Price cannot be negative".to_string());
            }
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Some("Stock cannot be negative".to_string());
            }
        }
        None
    }

    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name,
            code: self.code,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Query string for the product listing (GET /products)
#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Query string for the sales dashboard (GET /dashboard/category-sales)
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySalesQuery {
    /// One of today/yesterday/week/month/year/all; defaults to all
    #[serde(default)]
    pub time: Option<String>,
    /// Restricts rows to one cashier; set by the auth layer for
    /// non-privileged callers
    #[serde(default)]
    pub user_id: Option<i64>,
}
