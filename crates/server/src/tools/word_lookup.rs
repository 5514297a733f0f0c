//! word_lookup tool implementation.
//!
//! Read-through cached word lookup: serves the definition payload, appends
//! a history record, and reports the user's favorite flag for the word.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lexica_client::{DictError, DictionaryProvider, WordLookup};
use lexica_core::{Error, StoreDb};

/// Input parameters for word_lookup tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WordLookupParams {
    /// Word to look up (required).
    pub word: String,

    /// Identifier of the user performing the lookup (required).
    pub user_id: String,
}

/// Output structure for word_lookup tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordLookupOutput {
    /// The looked-up word.
    pub word: String,
    /// The provider's definition payload, verbatim.
    pub data: Value,
    /// Whether the payload came from the cache.
    pub from_cache: bool,
    /// Whether this user has favorited the word.
    pub is_favorite: bool,
}

/// Implementation of the word_lookup tool.
pub async fn lookup_impl<P: DictionaryProvider>(
    store: &StoreDb, lookup: &WordLookup<P>, params: WordLookupParams,
) -> Result<CallToolResult, McpError> {
    let output = lookup_output(store, lookup, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

/// Validate, fetch, and record a lookup.
pub(crate) async fn lookup_output<P: DictionaryProvider>(
    store: &StoreDb, lookup: &WordLookup<P>, params: WordLookupParams,
) -> Result<WordLookupOutput, Error> {
    let word = params.word.trim();
    if word.is_empty() {
        return Err(Error::Validation("word is required".into()));
    }
    let user_id = params.user_id.trim();
    if user_id.is_empty() {
        return Err(Error::Validation("user id is required".into()));
    }

    let result = lookup.fetch(word).await.map_err(|e| match e {
        DictError::WordNotFound(w) => Error::NotFound(format!("word not found: {w}")),
        DictError::InvalidWord(msg) => Error::Validation(msg),
        other => Error::Upstream(other.to_string()),
    })?;

    store.insert_history(word, user_id).await?;
    let is_favorite = store.is_favorite(word, user_id).await?;

    Ok(WordLookupOutput { word: word.to_string(), data: result.data, from_cache: result.from_cache, is_favorite })
}
