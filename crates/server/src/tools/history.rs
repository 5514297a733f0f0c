//! history_list tool implementation.
//!
//! Uncached by design: history is a per-user mutable list, and a cached
//! page could omit a lookup recorded moments earlier.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lexica_core::page;
use lexica_core::store::{HistoryRecord, UserHistory};
use lexica_core::{Error, PageRequest, PageResult, StoreDb};

/// Input parameters for history_list tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryListParams {
    /// Identifier of the user (required).
    pub user_id: String,

    /// Results per page (defaults to the configured page limit).
    #[serde(default)]
    pub limit: Option<u64>,

    /// 1-based page number; values below 1 are clamped to 1.
    #[serde(default)]
    pub page: Option<u64>,
}

/// Output structure for history_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryListOutput {
    /// Lookups for this page, most recent first.
    pub results: Vec<HistoryRecord>,
    pub total_docs: u64,
    pub page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<PageResult<HistoryRecord>> for HistoryListOutput {
    fn from(result: PageResult<HistoryRecord>) -> Self {
        Self {
            total_docs: result.total,
            page: result.page,
            total_pages: result.total_pages(),
            has_next: result.has_next(),
            has_prev: result.has_prev(),
            results: result.items,
        }
    }
}

/// Implementation of the history_list tool.
pub async fn list_impl(
    store: &StoreDb, default_limit: u64, params: HistoryListParams,
) -> Result<CallToolResult, McpError> {
    let output = list_output(store, default_limit, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

/// Validate and fetch one page of a user's history.
pub(crate) async fn list_output(
    store: &StoreDb, default_limit: u64, params: HistoryListParams,
) -> Result<HistoryListOutput, Error> {
    let user_id = params.user_id.trim();
    if user_id.is_empty() {
        return Err(Error::Validation("user id is required".into()));
    }

    let req = PageRequest::new(params.page.unwrap_or(1), params.limit.unwrap_or(default_limit))?;
    let source = UserHistory::new(store.clone(), user_id);

    let result = page::execute(&source, req).await?;
    Ok(result.into())
}
