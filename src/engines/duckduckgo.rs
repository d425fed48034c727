//! DuckDuckGo (HTML endpoint) result page extraction.

use scraper::{ElementRef, Html, Selector};

use super::{
    collect_results, decode, first_text, href, require_http, selector, BlockResult, Extractor,
    SkipReason,
};
use crate::{Provider, Result, SearchResult};

/// DuckDuckGo result page extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckDuckGo;

struct Selectors {
    link: Selector,
    title: Selector,
    snippet: Selector,
}

impl DuckDuckGo {
    fn parse_block(&self, block: ElementRef<'_>, sel: &Selectors) -> BlockResult {
        let link_el = block.select(&sel.link).next().ok_or(SkipReason::MissingLink)?;
        let title = first_text(block, &sel.title).ok_or(SkipReason::MissingTitle)?;

        let link = extract_redirect_url(href(link_el).unwrap_or_default());
        let link = require_http(link)?;

        let snippet = first_text(block, &sel.snippet).unwrap_or_default();

        Ok(SearchResult::new(title, link, snippet))
    }
}

/// Unwraps `//duckduckgo.com/l/?uddg=<target>&rut=...` redirect links.
fn extract_redirect_url(href: &str) -> String {
    match href.split_once("uddg=") {
        Some((_, rest)) => decode(rest.split('&').next().unwrap_or(rest)),
        None => href.to_string(),
    }
}

impl Extractor for DuckDuckGo {
    fn provider(&self) -> Provider {
        Provider::DuckDuckGo
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);

        let blocks = selector(".result, .web-result")?;
        let sel = Selectors {
            link: selector("a[href]")?,
            title: selector("h2, .result__title")?,
            snippet: selector(".result__snippet, p")?,
        };

        Ok(collect_results(
            Provider::DuckDuckGo,
            document.select(&blocks).take(limit),
            limit,
            |block| self.parse_block(block, &sel),
        ))
    }
}
