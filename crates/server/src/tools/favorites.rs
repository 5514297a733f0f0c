//! favorite_add, favorite_remove, and favorites_list tool implementations.
//!
//! The listing is uncached for the same reason as history: a cached page
//! could show stale ownership right after a favorite or unfavorite.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lexica_core::page;
use lexica_core::store::{FavoriteRecord, UserFavorites};
use lexica_core::{Error, PageRequest, PageResult, StoreDb};

/// Input parameters for favorite_add tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteAddParams {
    /// Word to favorite (required).
    pub word: String,

    /// Identifier of the user (required).
    pub user_id: String,
}

/// Input parameters for favorite_remove tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteRemoveParams {
    /// Word to unfavorite (required).
    pub word: String,

    /// Identifier of the user (required).
    pub user_id: String,
}

/// Input parameters for favorites_list tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FavoritesListParams {
    /// Identifier of the user (required).
    pub user_id: String,

    /// Results per page (defaults to the configured page limit).
    #[serde(default)]
    pub limit: Option<u64>,

    /// 1-based page number; values below 1 are clamped to 1.
    #[serde(default)]
    pub page: Option<u64>,
}

/// Output structure for favorite_remove tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteRemoveOutput {
    /// Whether a matching favorite existed.
    pub deleted: bool,
}

/// Output structure for favorites_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FavoritesListOutput {
    /// Favorites for this page, most recently favorited first.
    pub results: Vec<FavoriteRecord>,
    pub total_docs: u64,
    pub page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<PageResult<FavoriteRecord>> for FavoritesListOutput {
    fn from(result: PageResult<FavoriteRecord>) -> Self {
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

fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Implementation of the favorite_add tool.
pub async fn add_impl(store: &StoreDb, params: FavoriteAddParams) -> Result<CallToolResult, McpError> {
    let record = add_output(store, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&record).unwrap_or_default(),
    )]))
}

pub(crate) async fn add_output(store: &StoreDb, params: FavoriteAddParams) -> Result<FavoriteRecord, Error> {
    require("word", &params.word)?;
    require("user id", &params.user_id)?;
    store.upsert_favorite(params.word.trim(), params.user_id.trim()).await
}

/// Implementation of the favorite_remove tool.
pub async fn remove_impl(store: &StoreDb, params: FavoriteRemoveParams) -> Result<CallToolResult, McpError> {
    let output = remove_output(store, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

pub(crate) async fn remove_output(store: &StoreDb, params: FavoriteRemoveParams) -> Result<FavoriteRemoveOutput, Error> {
    require("word", &params.word)?;
    require("user id", &params.user_id)?;
    let deleted = store.delete_favorite(params.word.trim(), params.user_id.trim()).await?;
    Ok(FavoriteRemoveOutput { deleted })
}

/// Implementation of the favorites_list tool.
pub async fn list_impl(
    store: &StoreDb, default_limit: u64, params: FavoritesListParams,
) -> Result<CallToolResult, McpError> {
    let output = list_output(store, default_limit, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

pub(crate) async fn list_output(
    store: &StoreDb, default_limit: u64, params: FavoritesListParams,
) -> Result<FavoritesListOutput, Error> {
    require("user id", &params.user_id)?;

    let req = PageRequest::new(params.page.unwrap_or(1), params.limit.unwrap_or(default_limit))?;
    let source = UserFavorites::new(store.clone(), params.user_id.trim());

    let result = page::execute(&source, req).await?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_requires_word_and_user() {
        let store = StoreDb::open_in_memory().await.unwrap();

        let params = FavoriteAddParams { word: "".into(), user_id: "u1".into() };
        assert!(matches!(add_output(&store, params).await, Err(Error::Validation(_))));

        let params = FavoriteAddParams { word: "apple".into(), user_id: " ".into() };
        assert!(matches!(add_output(&store, params).await, Err(Error::Validation(_))));

        assert_eq!(store.count_favorites("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_twice_returns_same_record() {
        let store = StoreDb::open_in_memory().await.unwrap();
        let params = FavoriteAddParams { word: "apple".into(), user_id: "u1".into() };

        let first = add_output(&store, params.clone()).await.unwrap();
        let second = add_output(&store, params).await.unwrap();

        assert_eq!(first.favorited_at, second.favorited_at);
        assert_eq!(store.count_favorites("u1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_round_trip() {
        let store = StoreDb::open_in_memory().await.unwrap();
        add_output(&store, FavoriteAddParams { word: "apple".into(), user_id: "u1".into() })
            .await
            .unwrap();

        let params = FavoriteRemoveParams { word: "apple".into(), user_id: "u1".into() };
        let removed = remove_output(&store, params.clone()).await.unwrap();
        assert!(removed.deleted);

        let removed_again = remove_output(&store, params).await.unwrap();
        assert!(!removed_again.deleted);
    }

    #[tokio::test]
    async fn test_list_requires_user() {
        let store = StoreDb::open_in_memory().await.unwrap();
        let params = FavoritesListParams::default();
        assert!(matches!(list_output(&store, 10, params).await, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_reflects_mutations_immediately() {
        let store = StoreDb::open_in_memory().await.unwrap();
        for word in ["ash", "bark"] {
            add_output(&store, FavoriteAddParams { word: word.into(), user_id: "u1".into() })
                .await
                .unwrap();
        }

        let params = FavoritesListParams { user_id: "u1".into(), ..Default::default() };
        let before = list_output(&store, 10, params.clone()).await.unwrap();
        assert_eq!(before.total_docs, 2);
        assert_eq!(before.results[0].word, "bark");

        remove_output(&store, FavoriteRemoveParams { word: "bark".into(), user_id: "u1".into() })
            .await
            .unwrap();
        let after = list_output(&store, 10, params).await.unwrap();
        assert_eq!(after.total_docs, 1);
        assert_eq!(after.results[0].word, "ash");
    }
}
