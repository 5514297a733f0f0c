//! Provider trait seam for dictionary lookups.
//!
//! The read-through cache in [`crate::lookup`] is generic over this trait
//! so tests can substitute a scripted provider and assert on call counts.

use async_trait::async_trait;
use serde_json::Value;

use super::{DictClient, DictError};

/// A source of word definitions.
#[async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch the definition payload for a word.
    ///
    /// # Errors
    ///
    /// `DictError::WordNotFound` when the provider signals the word does
    /// not exist; any other variant for transport or provider failures.
    async fn lookup(&self, word: &str) -> Result<Value, DictError>;
}

#[async_trait]
impl DictionaryProvider for DictClient {
    async fn lookup(&self, word: &str) -> Result<Value, DictError> {
        DictClient::lookup(self, word).await
    }
}
