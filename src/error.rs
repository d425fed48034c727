//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// The public [`search`](crate::search()) entry point never returns these;
/// they surface only through [`WebSearch::try_search`](crate::WebSearch::try_search)
/// and the individual building blocks.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status code.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Request timeout exceeded.
    #[error("Request timeout exceeded")]
    Timeout,

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Provider name is not one of the supported engines.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

}
