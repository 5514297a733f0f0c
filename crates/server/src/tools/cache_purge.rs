//! cache_purge tool implementation.
//!
//! Expired entries are already invisible to readers; purging just reclaims
//! the memory they occupy.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lexica_core::{KeyedCache, PagedCache};

/// Output structure for cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Expired single-word lookups removed.
    pub lookups_purged: u64,
    /// Expired entry-search pages removed.
    pub pages_purged: u64,
}

/// Implementation of the cache_purge tool.
pub fn purge_impl(
    lookup_cache: &KeyedCache<Value>, entries_cache: &PagedCache<String>,
) -> Result<CallToolResult, McpError> {
    let output = CachePurgeOutput {
        lookups_purged: lookup_cache.purge_expired(),
        pages_purged: entries_cache.purge_expired(),
    };

    tracing::debug!(
        lookups = output.lookups_purged,
        pages = output.pages_purged,
        "purged expired cache entries"
    );

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_purge_removes_only_expired_lookups() {
        let lookup_cache = KeyedCache::new();
        lookup_cache.set("search:stale", json!({}), Duration::ZERO);
        lookup_cache.set("search:fresh", json!({}), Duration::from_secs(3600));
        let entries_cache = PagedCache::new(Duration::from_secs(3600));

        let result = purge_impl(&lookup_cache, &entries_cache);
        assert!(result.is_ok());
        assert_eq!(lookup_cache.len(), 1);
    }
}
