//! Free Dictionary API client.
//!
//! Provides a client for the dictionaryapi.dev word-definition API.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://api.dictionaryapi.dev/api/v2/entries/en/{word}`
//! - **Responses**: a JSON array of entries for a known word, HTTP 404 for
//!   an unknown one. The payload schema is not controlled by this system,
//!   so responses are kept as opaque `serde_json::Value` trees.
//! - **Errors**: 404 maps to [`DictError::WordNotFound`]; every other
//!   non-success status maps to [`DictError::HttpError`].

pub mod error;
pub mod provider;

pub use error::DictError;
pub use provider::DictionaryProvider;

use reqwest::header;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

/// Default base URL for the Free Dictionary API.
const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "mcp-dict/0.1";

/// Dictionary API client configuration.
#[derive(Debug, Clone)]
pub struct DictConfig {
    /// Base URL (default: https://api.dictionaryapi.dev/api/v2/entries/en).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: mcp-dict/0.x).
    pub user_agent: String,
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Dictionary API client.
#[derive(Debug, Clone)]
pub struct DictClient {
    http: reqwest::Client,
    config: DictConfig,
}

impl DictClient {
    /// Create a new dictionary client with the given configuration.
    pub fn new(config: DictConfig) -> Result<Self, DictError> {
        Url::parse(&config.base_url).map_err(|e| DictError::InvalidBaseUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| DictError::Network(std::sync::Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Build the entry URL for a word, percent-encoding it as a path segment.
    fn entry_url(&self, word: &str) -> Result<Url, DictError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| DictError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| DictError::InvalidBaseUrl("base URL cannot be a base".into()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Look up a word, returning the provider's definition payload verbatim.
    pub async fn lookup(&self, word: &str) -> Result<Value, DictError> {
        if word.trim().is_empty() {
            return Err(DictError::InvalidWord("word cannot be empty".into()));
        }

        let url = self.entry_url(word)?;
        let start = Instant::now();

        tracing::debug!("looking up word: {word}");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(DictError::from)?;

        let status = response.status();
        tracing::debug!("dictionary API response status: {status}");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DictError::WordNotFound(word.to_string()));
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(DictError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(DictError::from)?;
        let data: Value = serde_json::from_slice(&bytes).map_err(|e| DictError::Parse(e.to_string()))?;

        tracing::debug!("lookup for {word} completed in {:?}", start.elapsed());

        Ok(data)
    }
}
