//! HTTP-based page fetcher using reqwest.

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::debug;

use crate::fetcher::{FetchRequest, PageFetcher};
use crate::{Result, SearchError};

/// A page fetcher that performs plain HTTP GET requests via reqwest.
///
/// No default User-Agent is set on the client; each [`FetchRequest`] carries
/// its own headers.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Http(err)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String> {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.params)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(cookies) = &request.cookies {
            builder = builder.header(COOKIE, cookies.as_str());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!("GET {} -> {}", request.url, status);
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response.text().await.map_err(transport_error)
    }
}
