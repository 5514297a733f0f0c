//! Core types and shared functionality for mcp-dict.
//!
//! This crate provides:
//! - TTL cache primitives (keyed and paged)
//! - Pagination types and the paged-query executor
//! - SQLite-backed store for words, history, and favorites
//! - Configuration structures
//! - Unified error types

pub mod cache;
pub mod config;
pub mod error;
pub mod page;
pub mod store;

pub use cache::{KeyedCache, PagedCache};
pub use config::AppConfig;
pub use error::Error;
pub use page::{PageRequest, PageResult, Paged};
pub use store::StoreDb;
