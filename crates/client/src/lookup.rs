//! Read-through cache over a dictionary provider.
//!
//! On a hit the cached payload is returned as-is; on a miss the provider is
//! called exactly once and the payload stored under `search:{word}` for the
//! configured TTL. The hit/miss status travels with the result so transport
//! layers can report it. Provider failures are returned without being
//! cached, and concurrent misses for the same word may each call the
//! provider (no single-flight).

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use lexica_core::cache::{key, KeyedCache};

use crate::dict::{DictError, DictionaryProvider};

/// A lookup result with cache provenance.
#[derive(Debug, Clone)]
pub struct Lookup {
    /// The provider's definition payload, verbatim.
    pub data: Value,
    /// Whether the payload came from the cache.
    pub from_cache: bool,
}

/// Cached word lookups.
pub struct WordLookup<P> {
    provider: P,
    cache: Arc<KeyedCache<Value>>,
    ttl: Duration,
}

impl<P: DictionaryProvider> WordLookup<P> {
    pub fn new(provider: P, cache: Arc<KeyedCache<Value>>, ttl: Duration) -> Self {
        Self { provider, cache, ttl }
    }

    /// Fetch a word's definition, preferring the cache.
    pub async fn fetch(&self, word: &str) -> Result<Lookup, DictError> {
        let cache_key = key::lookup_key(word);

        if let Some(data) = self.cache.get(&cache_key) {
            tracing::debug!("lookup cache hit: {word}");
            return Ok(Lookup { data, from_cache: true });
        }

        let data = self.provider.lookup(word).await?;
        self.cache.set(&cache_key, data.clone(), self.ttl);

        Ok(Lookup { data, from_cache: false })
    }
}
