//! Per-provider HTML extraction.
//!
//! Each provider is a pure `(html, limit) -> results` parser behind the
//! [`Extractor`] trait. Result blocks are parsed one at a time; a block that
//! fails to parse yields a [`SkipReason`] and the loop moves on to the next.

mod bing;
mod brave;
mod duckduckgo;
mod google;
mod yahoo;

use std::fmt;

use scraper::{ElementRef, Selector};
use tracing::trace;

use crate::{Provider, Result, SearchError, SearchResult};

pub use bing::Bing;
pub use brave::Brave;
pub use duckduckgo::DuckDuckGo;
pub use google::Google;
pub use yahoo::Yahoo;

/// Parses one provider's result page.
pub trait Extractor: Send + Sync {
    /// The provider whose markup this extractor understands.
    fn provider(&self) -> Provider;

    /// Extracts at most `limit` results from a result page.
    ///
    /// Only fails when the page cannot be examined at all; individual
    /// malformed blocks are skipped.
    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>>;
}

/// Returns the extractor for `provider`.
pub fn extractor_for(provider: Provider) -> &'static dyn Extractor {
    match provider {
        Provider::Google => &Google,
        Provider::Yahoo => &Yahoo,
        Provider::Bing => &Bing,
        Provider::DuckDuckGo => &DuckDuckGo,
        Provider::Brave => &Brave,
    }
}

/// Why a candidate block produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingLink,
    MissingTitle,
    MissingSnippet,
    /// Link is not an absolute http(s) URL after unwrapping.
    NotHttp,
    Advertisement,
    /// Link points back at a search engine.
    ExcludedDomain,
    /// Title too short to be a real result label.
    ShortTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingLink => "no link",
            SkipReason::MissingTitle => "no title",
            SkipReason::MissingSnippet => "no snippet",
            SkipReason::NotHttp => "link is not http(s)",
            SkipReason::Advertisement => "advertisement",
            SkipReason::ExcludedDomain => "search engine domain",
            SkipReason::ShortTitle => "title too short",
        };
        f.write_str(reason)
    }
}

type BlockResult = std::result::Result<SearchResult, SkipReason>;

/// Runs `parse` over `candidates` until `limit` results are collected.
fn collect_results<'a, I, F>(
    provider: Provider,
    candidates: I,
    limit: usize,
    mut parse: F,
) -> Vec<SearchResult>
where
    I: IntoIterator<Item = ElementRef<'a>>,
    F: FnMut(ElementRef<'a>) -> BlockResult,
{
    let mut results = Vec::new();
    for (index, candidate) in candidates.into_iter().enumerate() {
        if results.len() >= limit {
            break;
        }
        match parse(candidate) {
            Ok(result) => results.push(result),
            Err(reason) => trace!(%provider, index, %reason, "skipping result block"),
        }
    }
    results
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector {css:?}: {e:?}")))
}

/// Text content of an element with whitespace runs collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn href(element: ElementRef<'_>) -> Option<&str> {
    element.value().attr("href")
}

/// Percent-decodes a redirect target. Invalid UTF-8 becomes U+FFFD.
fn decode(target: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(target.as_bytes())).into_owned()
}

/// Accepts `link` only if it is an absolute http or https URL.
fn require_http(link: String) -> std::result::Result<String, SkipReason> {
    if !link.starts_with("http") {
        return Err(SkipReason::NotHttp);
    }
    match url::Url::parse(&link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(link),
        _ => Err(SkipReason::NotHttp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_extractor_for_matches_provider() {
        for provider in Provider::ALL {
            assert_eq!(extractor_for(provider).provider(), provider);
        }
    }

    #[test]
    fn test_all_extractors_handle_empty_html() {
        for provider in Provider::ALL {
            let results = extractor_for(provider).extract("", 5).unwrap();
            assert!(results.is_empty(), "{provider} returned results for empty html");
        }
    }

    #[test]
    fn test_all_extractors_respect_zero_limit() {
        let html = r#"<html><body>
            <div class="ezO2md g algo result"><a href="https://example.com/a"><h3>An example result title</h3></a><h2>An example result title</h2><p>Snippet</p></div>
            <li class="b_algo"><a href="https://example.com/b">x</a><h2>Title</h2><p>Snippet</p></li>
        </body></html>"#;
        for provider in Provider::ALL {
            assert!(extractor_for(provider).extract(html, 0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<div>  Hello\n   <b>big</b>\tworld  </div>");
        let sel = selector("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert_eq!(element_text(div), "Hello big world");
    }

    #[test]
    fn test_selector_invalid() {
        assert!(matches!(selector("div[[["), Err(SearchError::Parse(_))));
    }

    #[test]
    fn test_require_http() {
        assert_eq!(
            require_http("https://example.com/".to_string()),
            Ok("https://example.com/".to_string())
        );
        assert_eq!(require_http("/search?q=x".to_string()), Err(SkipReason::NotHttp));
        assert_eq!(require_http("httpfoo".to_string()), Err(SkipReason::NotHttp));
        assert_eq!(require_http("http://".to_string()), Err(SkipReason::NotHttp));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("https%3A%2F%2Fexample.org%2Fpage"), "https://example.org/page");
        assert_eq!(decode("caf%E9"), "caf\u{FFFD}");
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Advertisement.to_string(), "advertisement");
        assert_eq!(SkipReason::NotHttp.to_string(), "link is not http(s)");
    }
}
