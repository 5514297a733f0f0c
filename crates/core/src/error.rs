//! Unified error types for mcp-dict.
//!
//! Every failure surfaces to the caller tagged with one of the kinds below
//! so the transport layer can map it to a distinct error code. The core
//! never retries or silently recovers.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tokio_rusqlite::rusqlite;

/// Unified error types for the mcp-dict server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed input (e.g., empty word, zero limit).
    /// Raised before any cache or store access.
    #[error("VALIDATION: {0}")]
    Validation(String),

    /// Word absent from the provider or the indexed vocabulary.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// External dictionary provider failed.
    #[error("UPSTREAM: {0}")]
    Upstream(String),

    /// Database operation failed.
    #[error("STORE_ERROR: {0}")]
    Store(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("STORE_ERROR: migration failed: {0}")]
    MigrationFailed(String),
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Store(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Store(tokio_rusqlite::Error::Close(c)),
            _ => Error::Store(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Store(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Store(tokio_rusqlite::Error::Error(err))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::Validation(msg) => (-32602, msg.clone()),
            Error::NotFound(msg) => (-32001, msg.clone()),
            Error::Upstream(msg) => (-32010, msg.clone()),
            Error::Store(e) => (-32002, e.to_string()),
            Error::MigrationFailed(msg) => (-32002, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
