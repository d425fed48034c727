//! Search result types.

use serde::{Deserialize, Serialize};

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Absolute http(s) URL of the result.
    pub link: String,
    /// Snippet shown on the results page.
    pub snippet: String,
    /// The snippet, or text fetched from the result page when full
    /// descriptions were requested.
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result whose description is its snippet.
    pub fn new(title: impl Into<String>, link: impl Into<String>, snippet: impl Into<String>) -> Self {
        let snippet = snippet.into();
        Self {
            title: title.into(),
            link: link.into(),
            description: snippet.clone(),
            snippet,
        }
    }
}

/// What a search returns: parsed results, or the provider's page as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchOutput {
    /// Extracted results.
    Results(Vec<SearchResult>),
    /// Raw response body.
    Raw(String),
}

impl SearchOutput {
    /// An empty result list.
    pub fn empty() -> Self {
        Self::Results(Vec::new())
    }

    /// Returns the results, or an empty slice for raw output.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            Self::Results(results) => results,
            Self::Raw(_) => &[],
        }
    }

    /// Returns the raw HTML, if this is raw output.
    pub fn raw_html(&self) -> Option<&str> {
        match self {
            Self::Raw(html) => Some(html),
            Self::Results(_) => None,
        }
    }

    /// Consumes the output and returns the results.
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            Self::Results(results) => results,
            Self::Raw(_) => Vec::new(),
        }
    }

    /// Number of results, or the byte length of raw output.
    pub fn len(&self) -> usize {
        match self {
            Self::Results(results) => results.len(),
            Self::Raw(html) => html.len(),
        }
    }

    /// Returns true when there are no results or the raw body is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SearchOutput {
    fn default() -> Self {
        Self::empty()
    }
}
