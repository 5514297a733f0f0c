//! words_import tool implementation.
//!
//! Seeds the indexed vocabulary. Words are immutable once loaded, so the
//! import ignores duplicates rather than updating them.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lexica_core::{Error, StoreDb};

/// Input parameters for words_import tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WordsImportParams {
    /// Words to add to the vocabulary (required, non-empty).
    pub words: Vec<String>,
}

/// Output structure for words_import tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordsImportOutput {
    /// How many words were newly inserted.
    pub imported: u64,
}

/// Implementation of the words_import tool.
pub async fn import_impl(store: &StoreDb, params: WordsImportParams) -> Result<CallToolResult, McpError> {
    let output = import_output(store, params).await?;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

pub(crate) async fn import_output(store: &StoreDb, params: WordsImportParams) -> Result<WordsImportOutput, Error> {
    if params.words.is_empty() {
        return Err(Error::Validation("words must not be empty".into()));
    }
    if params.words.iter().any(|w| w.trim().is_empty()) {
        return Err(Error::Validation("words must not contain blank entries".into()));
    }

    let imported = store.import_words(&params.words).await?;
    Ok(WordsImportOutput { imported })
}
