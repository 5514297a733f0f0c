//! entry_search tool implementation.
//!
//! Paginated vocabulary search, the only cached listing. Pages are cached
//! whole under the stable `entries:{search}:{limit}:{page}` key.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lexica_core::cache::key;
use lexica_core::store::WordSearch;
use lexica_core::{Error, PageRequest, PageResult, PagedCache, StoreDb};

/// Input parameters for entry_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntrySearchParams {
    /// Case-insensitive substring to match; empty browses all words.
    #[serde(default)]
    pub search: String,

    /// Results per page (defaults to the configured page limit).
    #[serde(default)]
    pub limit: Option<u64>,

    /// 1-based page number; values below 1 are clamped to 1.
    #[serde(default)]
    pub page: Option<u64>,
}

/// Output structure for entry_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntrySearchOutput {
    /// Matching words for this page, in lexical order.
    pub results: Vec<String>,
    /// Full match count irrespective of the page window.
    pub total_docs: u64,
    pub page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
    /// Whether the page came from the cache.
    pub from_cache: bool,
}

impl From<PageResult<String>> for EntrySearchOutput {
    fn from(result: PageResult<String>) -> Self {
        Self {
            total_docs: result.total,
            page: result.page,
            total_pages: result.total_pages(),
            has_next: result.has_next(),
            has_prev: result.has_prev(),
            from_cache: result.from_cache,
            results: result.items,
        }
    }
}

/// Implementation of the entry_search tool.
pub async fn search_impl(
    store: &StoreDb, cache: &PagedCache<String>, default_limit: u64, params: EntrySearchParams,
) -> Result<CallToolResult, McpError> {
    let output = search_output(store, cache, default_limit, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

/// Validate and execute one cached search page.
pub(crate) async fn search_output(
    store: &StoreDb, cache: &PagedCache<String>, default_limit: u64, params: EntrySearchParams,
) -> Result<EntrySearchOutput, Error> {
    let req = PageRequest::new(params.page.unwrap_or(1), params.limit.unwrap_or(default_limit))?;
    let search = params.search.trim();

    let cache_key = key::entries_key(search, req);
    let source = WordSearch::new(store.clone(), search);

    let result = cache.execute(&cache_key, &source, req).await?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const HOUR: Duration = Duration::from_secs(3600);

    async fn seeded_store() -> StoreDb {
        let store = StoreDb::open_in_memory().await.unwrap();
        let words: Vec<String> = [
            "ash", "bark", "cedar", "dew", "elm", "fern", "grove", "hazel", "ivy", "juniper", "kelp", "larch",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();
        store.import_words(&words).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_browse_all_first_page() {
        let store = seeded_store().await;
        let cache = PagedCache::new(HOUR);

        let params = EntrySearchParams::default();
        let output = search_output(&store, &cache, 10, params).await.unwrap();

        assert_eq!(output.results.len(), 10);
        assert_eq!(output.total_docs, 12);
        assert_eq!(output.total_pages, 2);
        assert!(output.has_next);
        assert!(!output.has_prev);
        assert!(!output.from_cache);
    }

    #[tokio::test]
    async fn test_repeat_search_is_served_from_cache() {
        let store = seeded_store().await;
        let cache = PagedCache::new(HOUR);

        let params = EntrySearchParams { search: "e".into(), limit: Some(5), page: Some(1) };
        let cold = search_output(&store, &cache, 10, params.clone()).await.unwrap();
        let warm = search_output(&store, &cache, 10, params).await.unwrap();

        assert!(!cold.from_cache);
        assert!(warm.from_cache);
        assert_eq!(warm.results, cold.results);
        assert_eq!(warm.total_docs, cold.total_docs);
    }

    #[tokio::test]
    async fn test_zero_limit_is_a_validation_error() {
        let store = seeded_store().await;
        let cache = PagedCache::new(HOUR);

        let params = EntrySearchParams { limit: Some(0), ..Default::default() };
        let result = search_output(&store, &cache, 10, params).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_page_zero_clamps_to_first_page() {
        let store = seeded_store().await;
        let cache = PagedCache::new(HOUR);

        let params = EntrySearchParams { page: Some(0), ..Default::default() };
        let output = search_output(&store, &cache, 10, params).await.unwrap();
        assert_eq!(output.page, 1);
        assert!(!output.has_prev);
    }

    #[tokio::test]
    async fn test_substring_filter() {
        let store = seeded_store().await;
        let cache = PagedCache::new(HOUR);

        let params = EntrySearchParams { search: "AR".into(), ..Default::default() };
        let output = search_output(&store, &cache, 10, params).await.unwrap();
        assert_eq!(output.results, vec!["bark", "cedar", "larch"]);
        assert_eq!(output.total_docs, 3);
    }
}
