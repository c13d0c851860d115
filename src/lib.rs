//! Retail POS - A lightweight POS reporting service
//!
//! Response caching for listing endpoints plus pure stock and sales
//! analytics over catalog rows.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
