//! Editor error types

use thiserror::Error;

/// Errors that can surface from the query-builder core
///
/// The core never produces fatal errors during normal editing: malformed
/// dimension JSON can only enter through a corrupted saved query, and
/// datasource failures are recovered locally by the resolver.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Malformed dimensions filter: {0}")]
    MalformedDimensions(#[from] serde_json::Error),

    #[error("Datasource lookup failed: {0}")]
    Lookup(String),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
