//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use serde_json::Value;

use lexica_client::{DictClient, DictConfig, WordLookup};
use lexica_core::{AppConfig, KeyedCache, PagedCache, StoreDb};

use crate::tools::{cache_purge, entry_search, favorites, history, word_lookup, words_import};

/// Shared application state handed to every tool.
pub struct AppState {
    pub config: AppConfig,
    pub store: StoreDb,
    pub lookup: WordLookup<DictClient>,
    pub lookup_cache: Arc<KeyedCache<Value>>,
    pub entries_cache: PagedCache<String>,
}

/// The main MCP server handler for mcp-dict.
#[derive(Clone)]
pub struct McpDictServer {
    tool_router: ToolRouter<Self>,
    state: Arc<AppState>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl McpDictServer {
    /// Create a new server handler over an opened store.
    pub fn new(config: AppConfig, store: StoreDb) -> anyhow::Result<Self> {
        let client = DictClient::new(DictConfig {
            base_url: config.api_base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })?;

        let lookup_cache = Arc::new(KeyedCache::new());
        let lookup = WordLookup::new(client, Arc::clone(&lookup_cache), config.cache_ttl());
        let entries_cache = PagedCache::new(config.cache_ttl());

        let state = Arc::new(AppState { config, store, lookup, lookup_cache, entries_cache });

        Ok(Self { tool_router: Self::tool_router(), state })
    }

    /// Look up a word's definition for a user.
    ///
    /// Read-through cached; every successful lookup is appended to the
    /// user's history.
    #[tool(
        description = "Look up a word in the dictionary. Returns the definition payload, cache status, and whether the user has favorited the word."
    )]
    async fn word_lookup(&self, params: Parameters<word_lookup::WordLookupParams>) -> Result<CallToolResult, McpError> {
        word_lookup::lookup_impl(&self.state.store, &self.state.lookup, params.0).await
    }

    /// Search the indexed vocabulary with pagination.
    #[tool(
        description = "Search dictionary entries by case-insensitive substring. Empty search browses all words. Returns one page plus navigation fields."
    )]
    async fn entry_search(&self, params: Parameters<entry_search::EntrySearchParams>) -> Result<CallToolResult, McpError> {
        entry_search::search_impl(
            &self.state.store,
            &self.state.entries_cache,
            self.state.config.default_page_limit,
            params.0,
        )
        .await
    }

    /// List a user's search history.
    #[tool(description = "List a user's lookup history, most recent first.")]
    async fn history_list(&self, params: Parameters<history::HistoryListParams>) -> Result<CallToolResult, McpError> {
        history::list_impl(&self.state.store, self.state.config.default_page_limit, params.0).await
    }

    /// Favorite a word for a user.
    #[tool(description = "Add a word to a user's favorites. Idempotent: re-favoriting returns the existing record.")]
    async fn favorite_add(&self, params: Parameters<favorites::FavoriteAddParams>) -> Result<CallToolResult, McpError> {
        favorites::add_impl(&self.state.store, params.0).await
    }

    /// Unfavorite a word for a user.
    #[tool(description = "Remove a word from a user's favorites. Reports whether a favorite existed.")]
    async fn favorite_remove(
        &self, params: Parameters<favorites::FavoriteRemoveParams>,
    ) -> Result<CallToolResult, McpError> {
        favorites::remove_impl(&self.state.store, params.0).await
    }

    /// List a user's favorited words.
    #[tool(description = "List a user's favorited words, most recently favorited first.")]
    async fn favorites_list(
        &self, params: Parameters<favorites::FavoritesListParams>,
    ) -> Result<CallToolResult, McpError> {
        favorites::list_impl(&self.state.store, self.state.config.default_page_limit, params.0).await
    }

    /// Seed the indexed vocabulary.
    #[tool(description = "Import words into the indexed vocabulary. Words already present are ignored.")]
    async fn words_import(&self, params: Parameters<words_import::WordsImportParams>) -> Result<CallToolResult, McpError> {
        words_import::import_impl(&self.state.store, params.0).await
    }

    /// Purge expired cache entries.
    #[tool(description = "Drop expired entries from the lookup and entry-page caches. Returns purge counts.")]
    async fn cache_purge(&self) -> Result<CallToolResult, McpError> {
        cache_purge::purge_impl(&self.state.lookup_cache, &self.state.entries_cache)
    }
}

impl ServerHandler for McpDictServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-dict".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
