//! Brave result page extraction.
//!
//! Brave's markup has no stable result container, so every outbound anchor
//! on the page is a candidate. The label comes from a heading next to the
//! anchor when there is one.

use scraper::{ElementRef, Html, Selector};

use super::{
    collect_results, element_text, href, require_http, selector, BlockResult, Extractor,
    SkipReason,
};
use crate::{Provider, Result, SearchResult};

/// Brave result page extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brave;

/// Links into these domains are navigation or ads, never results.
const EXCLUDED_DOMAINS: [&str; 4] = ["google.com", "yahoo.com", "bing.com", "brave.com"];

/// Titles must be longer than this many characters.
const MIN_TITLE_CHARS: usize = 10;

impl Brave {
    fn parse_anchor(&self, anchor: ElementRef<'_>, heading: &Selector) -> BlockResult {
        let link = href(anchor).ok_or(SkipReason::MissingLink)?;
        if !link.starts_with("http") {
            return Err(SkipReason::NotHttp);
        }
        if EXCLUDED_DOMAINS.iter().any(|domain| link.contains(domain)) {
            return Err(SkipReason::ExcludedDomain);
        }

        let parent_heading = anchor
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.select(heading).next());
        let title = match parent_heading {
            Some(h) => element_text(h),
            None => element_text(anchor),
        };
        if title.chars().count() <= MIN_TITLE_CHARS {
            return Err(SkipReason::ShortTitle);
        }

        let link = require_http(link.to_string())?;

        Ok(SearchResult::new(title, link, ""))
    }
}

impl Extractor for Brave {
    fn provider(&self) -> Provider {
        Provider::Brave
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);

        let anchors = selector("a[href]")?;
        let heading = selector("h1, h2, h3, h4")?;

        Ok(collect_results(
            Provider::Brave,
            document.select(&anchors),
            limit,
            |anchor| self.parse_anchor(anchor, &heading),
        ))
    }
}
