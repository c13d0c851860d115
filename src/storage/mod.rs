//! Storage Module
//!
//! In-memory storage interface consumed by the HTTP layer.

mod memory;

// Re-export public types
pub use memory::{MemoryStore, NewProduct, Product, ProductChanges};
