//! Google result page extraction.
//!
//! Google serves a lightweight layout (`div.ezO2md`) to simple clients and
//! the full layout (`.tF2Cxc`, `.g`, `.MjjYud`) otherwise; both are handled.

use scraper::{ElementRef, Html, Selector};

use super::{
    collect_results, decode, element_text, first_text, href, require_http, selector, BlockResult,
    Extractor, SkipReason,
};
use crate::{Provider, Result, SearchResult};

/// Google result page extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Google;

struct Selectors {
    link: Selector,
    title: Selector,
    heading: Selector,
    snippet: Selector,
    snippet_fallback: Selector,
}

impl Google {
    fn parse_block(&self, block: ElementRef<'_>, sel: &Selectors) -> BlockResult {
        let link_el = block.select(&sel.link).next().ok_or(SkipReason::MissingLink)?;

        let title = link_el
            .select(&sel.title)
            .next()
            .or_else(|| block.select(&sel.heading).next())
            .map(element_text)
            .ok_or(SkipReason::MissingTitle)?;

        let snippet = first_text(block, &sel.snippet)
            .or_else(|| first_text(block, &sel.snippet_fallback))
            .unwrap_or_default();

        let link = unwrap_redirect(href(link_el).unwrap_or_default());
        let link = require_http(link)?;

        Ok(SearchResult::new(title, link, snippet))
    }
}

/// Unwraps `/url?q=<target>&...` redirect links.
fn unwrap_redirect(href: &str) -> String {
    match href.strip_prefix("/url?q=") {
        Some(rest) => decode(rest.split('&').next().unwrap_or(rest)),
        None => href.to_string(),
    }
}

impl Extractor for Google {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);

        let primary = selector("div.ezO2md")?;
        let fallback = selector(".tF2Cxc, .g, .MjjYud")?;
        let sel = Selectors {
            link: selector("a[href]")?,
            title: selector("span.CVA68e")?,
            heading: selector("h3")?,
            snippet: selector("span.FrIlee")?,
            snippet_fallback: selector(".VwiC3b, .s3v9rd, .IsZvec")?,
        };

        let mut blocks: Vec<ElementRef<'_>> = document.select(&primary).collect();
        if blocks.is_empty() {
            blocks = document.select(&fallback).collect();
        }

        Ok(collect_results(
            Provider::Google,
            blocks.into_iter().take(limit),
            limit,
            |block| self.parse_block(block, &sel),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_provider() {
        assert_eq!(Google.provider(), Provider::Google);
    }

    #[test]
    fn test_parse_results_empty_html() {
        let results = Google.extract("<html><body></body></html>", 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_lightweight_layout() {
        let html = r#"
            <html><body>
                <div class="ezO2md">
                    <a href="/url?q=https://www.rust-lang.org/&amp;sa=U&amp;ved=abc">
                        <span class="CVA68e">Rust Programming Language</span>
                    </a>
                    <span class="FrIlee">A language empowering everyone.</span>
                </div>
                <div class="ezO2md">
                    <a href="/url?q=https://doc.rust-lang.org/book/&amp;sa=U">
                        <span class="CVA68e">The Rust Book</span>
                    </a>
                </div>
            </body></html>
        "#;
        let results = Google.extract(html, 5).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].link, "https://www.rust-lang.org/");
        assert_eq!(results[0].snippet, "A language empowering everyone.");
        assert_eq!(results[0].description, results[0].snippet);
        assert_eq!(results[1].link, "https://doc.rust-lang.org/book/");
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn test_redirect_link_unwrapped_exactly() {
        let html = r#"<div class="ezO2md">
            <a href="/url?q=https://example.com/&amp;sa=U&amp;ved=2ahUKE"><span class="CVA68e">Example Domain</span></a>
        </div>"#;
        let results = Google.extract(html, 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://example.com/");
    }

    #[test]
    fn test_redirect_link_percent_decoded() {
        assert_eq!(
            unwrap_redirect("/url?q=https://example.com/a%20b%3Fc%3D1&sa=U"),
            "https://example.com/a b?c=1"
        );
        assert_eq!(
            unwrap_redirect("https://direct.example.com/"),
            "https://direct.example.com/"
        );
    }

    #[test]
    fn test_fallback_containers_and_selectors() {
        let html = r#"
            <html><body>
                <div class="MjjYud">
                    <div class="tF2Cxc">
                        <a href="https://www.rust-lang.org/"><h3>Rust Programming Language</h3></a>
                        <div class="VwiC3b">A language empowering everyone to build reliable software.</div>
                    </div>
                </div>
            </body></html>
        "#;
        let results = Google.extract(html, 5).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].link, "https://www.rust-lang.org/");
        assert_eq!(
            results[0].snippet,
            "A language empowering everyone to build reliable software."
        );
    }

    #[test]
    fn test_primary_layout_takes_precedence() {
        let html = r#"
            <div class="g"><a href="https://fallback.example.com/"><h3>Fallback</h3></a></div>
            <div class="ezO2md"><a href="https://primary.example.com/"><span class="CVA68e">Primary</span></a></div>
        "#;
        let results = Google.extract(html, 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://primary.example.com/");
    }

    #[test]
    fn test_skips_internal_links() {
        let html = r#"
            <div class="g"><a href="/search?q=related"><h3>Related Search</h3></a></div>
            <div class="g"><a href="https://example.com/"><h3>Real Result</h3></a></div>
        "#;
        let results = Google.extract(html, 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Real Result");
    }

    #[test]
    fn test_skips_missing_title() {
        let html = r#"<div class="g"><a href="https://example.com">No h3 here</a></div>"#;
        let results = Google.extract(html, 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_limit_applies_to_blocks() {
        let html = r#"
            <div class="g"><a href="/search?q=one"><h3>Internal</h3></a></div>
            <div class="g"><a href="https://a.example.com/"><h3>A</h3></a></div>
            <div class="g"><a href="https://b.example.com/"><h3>B</h3></a></div>
        "#;
        let results = Google.extract(html, 2).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://a.example.com/");
    }
}
