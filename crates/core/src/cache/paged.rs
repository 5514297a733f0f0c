//! Cached paged queries.
//!
//! Composition of [`KeyedCache`] and the paged-query executor, used by the
//! entry-search path. Whole pages (items plus total) are cached under the
//! stable `entries:{search}:{limit}:{page}` key. History and favorites are
//! deliberately not routed through here: they are per-user mutable lists,
//! and a cached page could show stale ownership right after a mutation.

use std::time::Duration;

use crate::cache::KeyedCache;
use crate::page::{self, PageRequest, PageResult, Paged};
use crate::Error;

/// Read-through cache over a paged source.
pub struct PagedCache<T> {
    cache: KeyedCache<PageResult<T>>,
    ttl: Duration,
}

impl<T: Clone> PagedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { cache: KeyedCache::new(), ttl }
    }

    /// Return the cached page for `key`, or execute the query, cache the
    /// full result, and return it. `from_cache` reports which path ran.
    pub async fn execute<S>(&self, key: &str, source: &S, req: PageRequest) -> Result<PageResult<T>, Error>
    where
        S: Paged<Item = T>,
    {
        if let Some(mut hit) = self.cache.get(key) {
            tracing::debug!("page cache hit: {key}");
            hit.from_cache = true;
            return Ok(hit);
        }

        let result = page::execute(source, req).await?;
        self.cache.set(key, result.clone(), self.ttl);
        Ok(result)
    }

    /// Drop expired pages, returning how many were removed.
    pub fn purge_expired(&self) -> u64 {
        self.cache.purge_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source that counts how often it is queried.
    struct CountingSource {
        rows: Vec<Value>,
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new(rows: Vec<Value>) -> Self {
            Self { rows, fetches: AtomicUsize::new(0) }
        }
    }

    impl Paged for CountingSource {
        type Item = Value;

        async fn fetch(&self, skip: u64, limit: u64) -> Result<Vec<Value>, Error> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<u64, Error> {
            Ok(self.rows.len() as u64)
        }
    }

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_miss_then_hit() {
        let source = CountingSource::new(vec![json!({"word": "ash"}), json!({"word": "bark"})]);
        let cache = PagedCache::new(HOUR);
        let req = PageRequest::new(1, 10).unwrap();

        let cold = cache.execute("entries::10:1", &source, req).await.unwrap();
        assert!(!cold.from_cache);
        assert_eq!(cold.total, 2);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        let warm = cache.execute("entries::10:1", &source, req).await.unwrap();
        assert!(warm.from_cache);
        assert_eq!(warm.items, cold.items);
        assert_eq!(warm.total, cold.total);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_miss_independently() {
        let source = CountingSource::new(vec![json!({"word": "ash"})]);
        let cache = PagedCache::new(HOUR);

        cache
            .execute("entries:a:10:1", &source, PageRequest::new(1, 10).unwrap())
            .await
            .unwrap();
        cache
            .execute("entries:b:10:1", &source, PageRequest::new(1, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_page_recomputed() {
        let source = CountingSource::new(vec![json!({"word": "ash"})]);
        let cache = PagedCache::new(Duration::ZERO);
        let req = PageRequest::new(1, 10).unwrap();

        let first = cache.execute("entries::10:1", &source, req).await.unwrap();
        let second = cache.execute("entries::10:1", &source, req).await.unwrap();
        assert!(!first.from_cache);
        assert!(!second.from_cache);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }
}
