//! Bing result page extraction.

use scraper::{ElementRef, Html, Selector};

use super::{
    collect_results, first_text, href, require_http, selector, BlockResult, Extractor, SkipReason,
};
use crate::{Provider, Result, SearchResult};

/// Bing result page extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bing;

struct Selectors {
    link: Selector,
    title: Selector,
    snippet: Selector,
}

impl Bing {
    /// Organic results need a link, an `h2` title and a `p` snippet.
    fn parse_block(&self, block: ElementRef<'_>, sel: &Selectors) -> BlockResult {
        let link = block
            .select(&sel.link)
            .next()
            .and_then(href)
            .ok_or(SkipReason::MissingLink)?;
        let title = first_text(block, &sel.title).ok_or(SkipReason::MissingTitle)?;
        let snippet = first_text(block, &sel.snippet).ok_or(SkipReason::MissingSnippet)?;

        let link = require_http(link.to_string())?;

        Ok(SearchResult::new(title, link, snippet))
    }
}

impl Extractor for Bing {
    fn provider(&self) -> Provider {
        Provider::Bing
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);

        let blocks = selector("li.b_algo")?;
        let sel = Selectors {
            link: selector("a[href]")?,
            title: selector("h2")?,
            snippet: selector("p")?,
        };

        Ok(collect_results(
            Provider::Bing,
            document.select(&blocks).take(limit),
            limit,
            |block| self.parse_block(block, &sel),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bing_provider() {
        assert_eq!(Bing.provider(), Provider::Bing);
    }

    #[test]
    fn test_parse_results_empty_html() {
        assert!(Bing.extract("<html><body></body></html>", 5).unwrap().is_empty());
    }

    #[test]
    fn test_parse_results_with_data() {
        let html = r#"
            <html><body><ol id="b_results">
                <li class="b_algo">
                    <h2><a href="https://www.rust-lang.org/">Rust Programming Language</a></h2>
                    <div class="b_caption"><p>A language empowering everyone.</p></div>
                </li>
                <li class="b_algo">
                    <h2><a href="https://doc.rust-lang.org/book/">The Rust Book</a></h2>
                    <div class="b_caption"><p>The official book.</p></div>
                </li>
            </ol></body></html>
        "#;
        let results = Bing.extract(html, 5).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].link, "https://www.rust-lang.org/");
        assert_eq!(results[0].snippet, "A language empowering everyone.");
        assert_eq!(results[1].title, "The Rust Book");
    }

    #[test]
    fn test_requires_all_three_parts() {
        let html = r#"<ol>
            <li class="b_algo"><h2><a href="https://no-snippet.example.com/">No snippet</a></h2></li>
            <li class="b_algo"><a href="https://no-title.example.com/">x</a><p>Snippet</p></li>
            <li class="b_algo"><h2>No link</h2><p>Snippet</p></li>
            <li class="b_algo"><h2><a href="https://ok.example.com/">Ok</a></h2><p>Snippet</p></li>
        </ol>"#;
        let results = Bing.extract(html, 10).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://ok.example.com/");
    }

    #[test]
    fn test_skips_relative_links() {
        let html = r#"<ol>
            <li class="b_algo"><h2><a href="/images/search?q=rust">Images</a></h2><p>Snippet</p></li>
        </ol>"#;
        assert!(Bing.extract(html, 5).unwrap().is_empty());
    }

    #[test]
    fn test_limit() {
        let item = r#"<li class="b_algo"><h2><a href="https://example.com/">Example</a></h2><p>S</p></li>"#;
        let html = format!("<ol>{}</ol>", item.repeat(4));
        assert_eq!(Bing.extract(&html, 3).unwrap().len(), 3);
    }
}
