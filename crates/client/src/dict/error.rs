//! Dictionary API client error types.

use std::sync::Arc;

/// Errors from the dictionary API client.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// The provider reported the word does not exist (HTTP 404).
    #[error("word not found: {0}")]
    WordNotFound(String),

    /// Empty or otherwise unusable word.
    #[error("invalid word: {0}")]
    InvalidWord(String),

    /// Malformed base URL in configuration.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Non-success HTTP response other than 404.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for DictError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { DictError::Timeout } else { DictError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictError::WordNotFound("aardwolf".to_string());
        assert!(err.to_string().contains("aardwolf"));

        let err = DictError::HttpError { status: 502 };
        assert!(err.to_string().contains("502"));
    }
}
