//! # websearch
//!
//! Keyword search against public web search engines with uniform results.
//!
//! Given a provider (google, yahoo, bing, duckduckgo or brave) and a query,
//! the library fetches the provider's HTML results page and extracts a list
//! of [`SearchResult`]s, each with a title, an absolute link, the snippet,
//! and a description that can optionally be replaced by text from the
//! result's own page.
//!
//! Extraction is best effort. Provider markup changes without notice, so
//! every failure degrades to an empty result list instead of an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use websearch::{Provider, SearchRequest, WebSearch};
//!
//! #[tokio::main]
//! async fn main() {
//!     let search = WebSearch::new();
//!     let request = SearchRequest::new("rust programming")
//!         .with_provider(Provider::DuckDuckGo)
//!         .with_limit(3);
//!
//!     for result in search.search(&request).await.results() {
//!         println!("{}: {}", result.title, result.link);
//!     }
//! }
//! ```

mod description;
mod error;
mod provider;
mod query;
mod result;
mod search;
mod user_agent;

pub mod engines;
pub mod fetcher;
pub mod fetcher_http;

pub use description::{extract_description, fetch_full_description, DescriptionOptions};
pub use error::{Result, SearchError};
pub use fetcher::{FetchRequest, PageFetcher};
pub use fetcher_http::HttpFetcher;
pub use provider::{HeaderProfile, Provider, ProviderConfig, SearchOptions};
pub use query::SearchRequest;
pub use result::{SearchOutput, SearchResult};
pub use search::{search, WebSearch};
pub use user_agent::{random_user_agent, USER_AGENTS};
