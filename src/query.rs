//! Search request representation.

use serde::{Deserialize, Serialize};

use crate::Provider;

fn default_limit() -> usize {
    5
}

/// A search request with all parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Provider to query.
    #[serde(default)]
    pub provider: Provider,
    /// The search terms.
    pub query: String,
    /// Maximum number of results to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Replace each result's description with text fetched from its page.
    #[serde(default)]
    pub full_description: bool,
    /// Return the provider's HTML instead of parsed results.
    #[serde(default)]
    pub raw_html: bool,
}

impl SearchRequest {
    /// Creates a new request for the given terms with default settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            provider: Provider::default(),
            query: query.into(),
            limit: default_limit(),
            full_description: false,
            raw_html: false,
        }
    }

    /// Sets the provider.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Sets the maximum number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables full-description extraction.
    pub fn with_full_description(mut self, enabled: bool) -> Self {
        self.full_description = enabled;
        self
    }

    /// Enables or disables raw HTML output.
    pub fn with_raw_html(mut self, enabled: bool) -> Self {
        self.raw_html = enabled;
        self
    }
}
