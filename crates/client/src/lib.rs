//! Client code for mcp-dict.
//!
//! This crate provides the external dictionary API client, the provider
//! trait seam used for testing, and the read-through lookup cache shared
//! by the server.

pub mod dict;
pub mod lookup;

pub use dict::{DictClient, DictConfig, DictError, DictionaryProvider};
pub use lookup::{Lookup, WordLookup};
