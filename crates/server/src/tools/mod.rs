//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mcp-dict server. Every
//! tool validates its inputs before touching cache or store.

pub mod cache_purge;
pub mod entry_search;
pub mod favorites;
pub mod history;
pub mod word_lookup;
pub mod words_import;

pub use entry_search::{EntrySearchOutput, EntrySearchParams};
pub use word_lookup::{WordLookupOutput, WordLookupParams};
