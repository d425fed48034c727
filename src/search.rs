//! Search orchestration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::description::{fetch_full_description, DescriptionOptions};
use crate::engines::extractor_for;
use crate::fetcher::{FetchRequest, PageFetcher};
use crate::fetcher_http::HttpFetcher;
use crate::user_agent::random_user_agent;
use crate::{Provider, Result, SearchOptions, SearchOutput, SearchRequest};

/// Issues a search against one provider and extracts its results.
///
/// Requests run one after another: the results page first, then one page
/// per result when full descriptions are requested.
pub struct WebSearch {
    fetcher: Arc<dyn PageFetcher>,
    options: SearchOptions,
}

impl WebSearch {
    /// Creates a search client backed by [`HttpFetcher`].
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()))
    }

    /// Creates a search client backed by a custom fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            options: SearchOptions::default(),
        }
    }

    /// Sets timeouts and description limits.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the current options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Builds the results-page request for `request`.
    pub fn build_request(&self, request: &SearchRequest) -> FetchRequest {
        let config = request.provider.config();
        let mut fetch = FetchRequest::get(config.base_url)
            .with_params(config.params(&request.query, request.limit))
            .with_headers(config.header_profile.headers(random_user_agent()))
            .with_timeout(Duration::from_secs(self.options.search_timeout_secs));
        if let Some(cookies) = config.cookies {
            fetch = fetch.with_cookies(cookies);
        }
        fetch
    }

    /// Performs a search, returning an empty result list on any failure.
    ///
    /// An empty list does not say whether the provider had no results,
    /// blocked the request or changed its markup; the cause is logged at
    /// `warn`. Use [`try_search`](Self::try_search) to observe it.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutput {
        match self.try_search(request).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Search on {} failed: {}", request.provider, e);
                SearchOutput::empty()
            }
        }
    }

    /// Performs a search against a provider given by name.
    ///
    /// Unknown names return an empty result list without any request.
    pub async fn search_by_name(&self, provider: &str, request: SearchRequest) -> SearchOutput {
        match provider.parse::<Provider>() {
            Ok(provider) => self.search(&request.with_provider(provider)).await,
            Err(e) => {
                debug!("{}", e);
                SearchOutput::empty()
            }
        }
    }

    /// Performs a search, reporting transport and parse failures.
    pub async fn try_search(&self, request: &SearchRequest) -> Result<SearchOutput> {
        let fetch = self.build_request(request);
        debug!("Searching {} for {:?}", request.provider, request.query);

        let html = self.fetcher.fetch(&fetch).await?;
        if request.raw_html {
            return Ok(SearchOutput::Raw(html));
        }

        let mut results = extractor_for(request.provider).extract(&html, request.limit)?;
        debug!("{} returned {} results", request.provider, results.len());

        if request.full_description {
            let options = DescriptionOptions::from(&self.options);
            for result in &mut results {
                result.description =
                    fetch_full_description(self.fetcher.as_ref(), &result.link, &options).await;
            }
        }

        Ok(SearchOutput::Results(results))
    }
}

impl Default for WebSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Searches `provider` for `query` over HTTP.
///
/// Returns at most `limit` results, the raw results page when `raw_html` is
/// set, or an empty list if the provider is unknown or anything fails.
pub async fn search(
    provider: &str,
    limit: usize,
    query: &str,
    full_description: bool,
    raw_html: bool,
) -> SearchOutput {
    let request = SearchRequest::new(query)
        .with_limit(limit)
        .with_full_description(full_description)
        .with_raw_html(raw_html);
    WebSearch::new().search_by_name(provider, request).await
}
