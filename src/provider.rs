//! Supported providers and their static request configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// A supported web search provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    Yahoo,
    Bing,
    DuckDuckGo,
    Brave,
}

impl Provider {
    /// All providers, in the order they are listed to users.
    pub const ALL: [Provider; 5] = [
        Provider::Google,
        Provider::Yahoo,
        Provider::Bing,
        Provider::DuckDuckGo,
        Provider::Brave,
    ];

    /// Returns the lowercase provider name.
    pub fn name(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Yahoo => "yahoo",
            Provider::Bing => "bing",
            Provider::DuckDuckGo => "duckduckgo",
            Provider::Brave => "brave",
        }
    }

    /// Returns the static request configuration for this provider.
    pub fn config(self) -> &'static ProviderConfig {
        match self {
            Provider::Google => &GOOGLE,
            Provider::Yahoo => &YAHOO,
            Provider::Bing => &BING,
            Provider::DuckDuckGo => &DUCKDUCKGO,
            Provider::Brave => &BRAVE,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| SearchError::UnknownProvider(s.to_string()))
    }
}

/// Which header set a provider receives.
///
/// Google and Bing get the minimal set; the others react better to a full
/// browser-like set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProfile {
    /// `User-Agent` and a generic `Accept`.
    Minimal,
    /// A complete browser-like header set.
    Browser,
}

impl HeaderProfile {
    /// Builds the header list for one request with the given user agent.
    pub fn headers(self, user_agent: &str) -> Vec<(String, String)> {
        let mut headers = vec![("User-Agent".to_string(), user_agent.to_string())];
        let rest: &[(&str, &str)] = match self {
            HeaderProfile::Minimal => &[("Accept", "*/*")],
            HeaderProfile::Browser => &[
                (
                    "Accept",
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
                ("Accept-Language", "en-US,en;q=0.9"),
                ("Accept-Encoding", "gzip, deflate"),
                ("DNT", "1"),
                ("Connection", "keep-alive"),
                ("Upgrade-Insecure-Requests", "1"),
            ],
        };
        headers.extend(rest.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        headers
    }
}

/// Static request configuration for one provider.
pub struct ProviderConfig {
    /// Search endpoint.
    pub base_url: &'static str,
    /// Header set sent with the search request.
    pub header_profile: HeaderProfile,
    /// Value of the `Cookie` header, if any.
    pub cookies: Option<&'static str>,
    build_params: fn(&str, usize) -> Vec<(&'static str, String)>,
}

impl ProviderConfig {
    /// Returns the ordered query parameters for a search.
    pub fn params(&self, query: &str, limit: usize) -> Vec<(&'static str, String)> {
        (self.build_params)(query, limit)
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("header_profile", &self.header_profile)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}

static GOOGLE: ProviderConfig = ProviderConfig {
    base_url: "https://www.google.com/search",
    header_profile: HeaderProfile::Minimal,
    cookies: Some("CONSENT=PENDING+987; SOCS=CAESHAgBEhIaAB"),
    build_params: |query, limit| {
        vec![
            ("q", query.to_string()),
            ("num", limit.saturating_add(2).to_string()),
            ("hl", "en".to_string()),
            ("start", "0".to_string()),
            ("safe", "active".to_string()),
        ]
    },
};

static YAHOO: ProviderConfig = ProviderConfig {
    base_url: "https://search.yahoo.com/search",
    header_profile: HeaderProfile::Browser,
    cookies: None,
    build_params: |query, _| vec![("p", query.to_string())],
};

static BING: ProviderConfig = ProviderConfig {
    base_url: "https://www.bing.com/search",
    header_profile: HeaderProfile::Minimal,
    cookies: None,
    build_params: |query, limit| vec![("q", query.to_string()), ("count", limit.to_string())],
};

static DUCKDUCKGO: ProviderConfig = ProviderConfig {
    base_url: "https://html.duckduckgo.com/html/",
    header_profile: HeaderProfile::Browser,
    cookies: None,
    build_params: |query, _| vec![("q", query.to_string())],
};

static BRAVE: ProviderConfig = ProviderConfig {
    base_url: "https://search.brave.com/search",
    header_profile: HeaderProfile::Browser,
    cookies: None,
    build_params: |query, _| vec![("q", query.to_string())],
};

/// Tunable limits for a [`WebSearch`](crate::WebSearch).
///
/// The defaults are the behaviour every caller gets from [`crate::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Timeout for the search page request, in seconds.
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,
    /// Timeout for each full-description page request, in seconds.
    #[serde(default = "default_description_timeout")]
    pub description_timeout_secs: u64,
    /// Number of text blocks joined into a full description.
    #[serde(default = "default_description_max_blocks")]
    pub description_max_blocks: usize,
    /// A text block must be longer than this many characters to count.
    #[serde(default = "default_description_min_chars")]
    pub description_min_chars: usize,
}

fn default_search_timeout() -> u64 {
    15
}

fn default_description_timeout() -> u64 {
    10
}

fn default_description_max_blocks() -> usize {
    8
}

fn default_description_min_chars() -> usize {
    20
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_timeout_secs: default_search_timeout(),
            description_timeout_secs: default_description_timeout(),
            description_max_blocks: default_description_max_blocks(),
            description_min_chars: default_description_min_chars(),
        }
    }
}
