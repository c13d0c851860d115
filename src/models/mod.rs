//! Models Module
//!
//! Request and response DTOs for the HTTP API.

mod requests;
mod responses;

pub use requests::{
    CategorySalesQuery, CreateProductRequest, ListProductsQuery, UpdateProductRequest,
};
pub use responses::{
    CacheStatsResponse, CategorySalesResponse, DateRange, HealthResponse, MessageResponse,
    ProductPage,
};
