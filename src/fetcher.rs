//! Page fetcher abstraction for retrieving HTML content.

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;

/// One GET request: URL, query parameters, headers, cookies and a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Target URL, without query string.
    pub url: String,
    /// Query parameters, in order.
    pub params: Vec<(String, String)>,
    /// Request headers, in order.
    pub headers: Vec<(String, String)>,
    /// Value for the `Cookie` header.
    pub cookies: Option<String>,
    /// Total time allowed for the request.
    pub timeout: Duration,
}

impl FetchRequest {
    /// Creates a GET request for `url` with no parameters and a 10 second timeout.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
            headers: Vec::new(),
            cookies: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the query parameters.
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params = params.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the headers.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the `Cookie` header value.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of the first query parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for fetching the HTML body of a request.
///
/// Implementations must treat DNS, connection, timeout and non-2xx responses
/// as errors; a returned `Ok` body is always from a successful response.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs the request and returns the response text.
    async fn fetch(&self, request: &FetchRequest) -> Result<String>;
}
