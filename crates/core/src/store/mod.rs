//! SQLite-backed persistent store for words, history, and favorites.
//!
//! This module provides the persistence layer with async access via
//! tokio-rusqlite. It supports:
//!
//! - Bulk vocabulary import with substring search
//! - Append-only per-user search history
//! - Idempotent per-user favorites
//! - Automatic schema migrations
//! - WAL mode for concurrent access

pub mod connection;
pub mod favorites;
pub mod history;
pub mod migrations;
pub mod words;

pub use crate::Error;

pub use connection::StoreDb;
pub use favorites::{FavoriteRecord, UserFavorites};
pub use history::{HistoryRecord, UserHistory};
pub use words::WordSearch;
