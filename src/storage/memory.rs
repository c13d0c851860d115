//! In-Memory Store Module
//!
//! Explicit storage-access interface backing the HTTP layer. In the
//! deployed system this seam is a hosted database; here it is a plain
//! in-memory store so the cache and report engines consume plain rows.

use chrono::{Duration, Utc};

use crate::error::{AppError, Result};
use crate::report::{CategoryRow, PurchaseDetail, SaleDetail};

// == Product ==
/// A catalog product row.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub category_id: i64,
    pub price: f64,
    pub stock: i64,
}

// == New Product ==
/// Field set for inserting a product; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub category_id: i64,
    pub price: f64,
    pub stock: i64,
}

// == Product Changes ==
/// Partial update applied to an existing product.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category_id: Option<i64>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

// == Memory Store ==
/// In-memory rows for products, categories, and purchase/sale details.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
    categories: Vec<CategoryRow>,
    purchase_details: Vec<PurchaseDetail>,
    sale_details: Vec<SaleDetail>,
    next_product_id: i64,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            purchase_details: Vec::new(),
            sale_details: Vec::new(),
            next_product_id: 1,
        }
    }

    /// Creates a store seeded with a small demo catalog, used by the binary
    /// so the endpoints return content out of the box.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        store.add_category(CategoryRow {
            id: 1,
            name: "Beverages".to_string(),
            code: "BEV".to_string(),
            stock: 4,
            selling_price: 2.5,
        });
        store.add_category(CategoryRow {
            id: 2,
            name: "Snacks".to_string(),
            code: "SNK".to_string(),
            stock: 55,
            selling_price: 1.8,
        });
        store.add_category(CategoryRow {
            id: 3,
            name: "Household".to_string(),
            code: "HSH".to_string(),
            stock: 120,
            selling_price: 6.0,
        });

        let now = Utc::now();
        store.add_purchase(PurchaseDetail {
            category_id: 1,
            quantity: 20,
            subtotal: 30.0,
            created_at: now - Duration::days(10),
            supplier: Some("Fresh Springs Co".to_string()),
        });
        store.add_purchase(PurchaseDetail {
            category_id: 2,
            quantity: 40,
            subtotal: 48.0,
            created_at: now - Duration::days(6),
            supplier: Some("Crunch Partners".to_string()),
        });
        store.add_sale(SaleDetail {
            category_id: 1,
            category_name: "Beverages".to_string(),
            quantity: 16,
            subtotal: 40.0,
            created_at: now - Duration::days(2),
            user_id: Some(1),
        });
        store.add_sale(SaleDetail {
            category_id: 2,
            category_name: "Snacks".to_string(),
            quantity: 12,
            subtotal: 21.6,
            created_at: now - Duration::hours(3),
            user_id: Some(2),
        });

        store.insert_product(NewProduct {
            name: "Sparkling Water 500ml".to_string(),
            code: "BEV-001".to_string(),
            category_id: 1,
            price: 2.5,
            stock: 4,
        });
        store.insert_product(NewProduct {
            name: "Salted Crackers".to_string(),
            code: "SNK-001".to_string(),
            category_id: 2,
            price: 1.8,
            stock: 55,
        });

        store
    }

    // == Products ==
    /// Lists products matching an optional case-insensitive name/code
    /// search, paginated. Returns the page items and the total match count.
    pub fn list_products(
        &self,
        search: Option<&str>,
        page: usize,
        per_page: usize,
    ) -> (Vec<Product>, usize) {
        let needle = search.map(|s| s.to_lowercase());
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| match &needle {
                Some(n) => {
                    p.name.to_lowercase().contains(n) || p.code.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect();

        let total = matches.len();
        let page = page.max(1);
        let items = matches
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        (items, total)
    }

    /// Inserts a product and returns it with its assigned id.
    pub fn insert_product(&mut self, new: NewProduct) -> Product {
        let product = Product {
            id: self.next_product_id,
            name: new.name,
            code: new.code,
            category_id: new.category_id,
            price: new.price,
            stock: new.stock,
        };
        self.next_product_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Applies a partial update to a product.
    pub fn update_product(&mut self, id: i64, changes: ProductChanges) -> Result<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} does not exist", id)))?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(code) = changes.code {
            product.code = code;
        }
        if let Some(category_id) = changes.category_id {
            product.category_id = category_id;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }

        Ok(product.clone())
    }

    /// Removes a product by id.
    pub fn delete_product(&mut self, id: i64) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(AppError::NotFound(format!("Product {} does not exist", id)));
        }
        Ok(())
    }

    // == Report Rows ==
    pub fn categories(&self) -> &[CategoryRow] {
        &self.categories
    }

    pub fn purchase_details(&self) -> &[PurchaseDetail] {
        &self.purchase_details
    }

    pub fn sale_details(&self) -> &[SaleDetail] {
        &self.sale_details
    }

    pub fn add_category(&mut self, category: CategoryRow) {
        self.categories.push(category);
    }

    pub fn add_purchase(&mut self, row: PurchaseDetail) {
        self.purchase_details.push(row);
    }

    pub fn add_sale(&mut self, row: SaleDetail) {
        self.sale_details.push(row);
    }
}
