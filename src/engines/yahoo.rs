//! Yahoo result page extraction.
//!
//! Yahoo interleaves sponsored blocks with organic ones and wraps every
//! outbound link in a `/RU=<target>/RK=...` redirect.

use scraper::{ElementRef, Html, Selector};

use super::{
    collect_results, decode, element_text, first_text, href, require_http, selector, BlockResult,
    Extractor, SkipReason,
};
use crate::{Provider, Result, SearchResult};

/// Yahoo result page extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yahoo;

/// Blocks examined per requested result; most of the surplus are ads.
const OVERFETCH: usize = 3;

const AD_CLASSES: [&str; 3] = ["AdTop", "AdHdrTop", "ads"];

struct Selectors {
    ad_marker: Selector,
    link: Selector,
    title: Selector,
    snippet: Selector,
}

impl Yahoo {
    fn parse_block(&self, block: ElementRef<'_>, sel: &Selectors) -> BlockResult {
        if is_advertisement(block, &sel.ad_marker) {
            return Err(SkipReason::Advertisement);
        }

        let link_el = block.select(&sel.link).next().ok_or(SkipReason::MissingLink)?;
        let title = first_text(block, &sel.title).ok_or(SkipReason::MissingTitle)?;

        let link = unwrap_redirect(href(link_el).unwrap_or_default());
        let link = require_http(link)?;

        let snippet = first_text(block, &sel.snippet).unwrap_or_default();

        Ok(SearchResult::new(title, link, snippet))
    }
}

fn is_advertisement(block: ElementRef<'_>, ad_marker: &Selector) -> bool {
    let own = block.value();
    own.classes().any(|class| AD_CLASSES.contains(&class))
        || own.attr("data-matarget") == Some("ad")
        || block.select(ad_marker).next().is_some()
}

/// Unwraps `.../RU=<target>/RK=...` redirect links.
///
/// Without an `/RK=` terminator, click-redirect links (`/rdclk`, `/cbclk`)
/// end the target at the next `/`.
fn unwrap_redirect(href: &str) -> String {
    let Some((_, target)) = href.split_once("RU=") else {
        return href.to_string();
    };
    let end = target.find("/RK=").or_else(|| {
        if href.contains("/rdclk") || href.contains("/cbclk") {
            target.find('/')
        } else {
            None
        }
    });
    decode(&target[..end.unwrap_or(target.len())])
}

impl Extractor for Yahoo {
    fn provider(&self) -> Provider {
        Provider::Yahoo
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);

        let blocks = selector(".algo, .Sr")?;
        let sel = Selectors {
            ad_marker: selector(r#".AdTop, .AdHdrTop, .ads, [data-matarget="ad"]"#)?,
            link: selector("a[href]")?,
            title: selector("h3, .title")?,
            snippet: selector("p, .compText p, .fc-dustygray")?,
        };

        Ok(collect_results(
            Provider::Yahoo,
            document.select(&blocks).take(limit.saturating_mul(OVERFETCH)),
            limit,
            |block| self.parse_block(block, &sel),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organic(n: usize) -> String {
        format!(
            r#"<div class="algo">
                <h3 class="title"><a href="https://r.search.yahoo.com/_ylt=A0/RV=2/RE=1/RO=10/RU=https%3a%2f%2fsite{n}.example.com%2fpage/RK=2/RS=abc-">Organic result {n}</a></h3>
                <div class="compText"><p>Snippet {n}</p></div>
            </div>"#
        )
    }

    #[test]
    fn test_yahoo_provider() {
        assert_eq!(Yahoo.provider(), Provider::Yahoo);
    }

    #[test]
    fn test_parse_results_empty_html() {
        assert!(Yahoo.extract("<html><body></body></html>", 5).unwrap().is_empty());
    }

    #[test]
    fn test_parse_organic_results() {
        let html = format!("<html><body>{}{}</body></html>", organic(1), organic(2));
        let results = Yahoo.extract(&html, 5).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Organic result 1");
        assert_eq!(results[0].link, "https://site1.example.com/page");
        assert_eq!(results[0].snippet, "Snippet 1");
        assert_eq!(results[1].link, "https://site2.example.com/page");
    }

    #[test]
    fn test_skips_ad_top_block() {
        let html = format!(
            r#"<html><body>
                <div class="Sr">
                    <div class="AdTop">Ad</div>
                    <h3><a href="https://ads.example.com/">Sponsored but valid looking</a></h3>
                    <p>Buy now</p>
                </div>
                {}
            </body></html>"#,
            organic(1)
        );
        let results = Yahoo.extract(&html, 5).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.link != "https://ads.example.com/"));
    }

    #[test]
    fn test_skips_block_with_ad_class_on_itself() {
        let html = r#"<div class="algo AdTop">
            <h3><a href="https://ads.example.com/">Sponsored</a></h3>
        </div>"#;
        assert!(Yahoo.extract(html, 5).unwrap().is_empty());
    }

    #[test]
    fn test_skips_ad_data_attribute() {
        let html = r#"<div class="algo">
            <h3><a data-matarget="ad" href="https://ads.example.com/">Sponsored</a></h3>
        </div>"#;
        assert!(Yahoo.extract(html, 5).unwrap().is_empty());
    }

    #[test]
    fn test_stops_at_limit() {
        let html: String = (1..=6).map(organic).collect();
        let results = Yahoo.extract(&html, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].link, "https://site2.example.com/page");
    }

    #[test]
    fn test_overfetch_reaches_past_ads() {
        let ad = r#"<div class="algo ads"><h3><a href="https://ads.example.com/">Ad</a></h3></div>"#;
        let html = format!("{ad}{ad}{}", organic(1));
        let results = Yahoo.extract(&html, 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://site1.example.com/page");
    }

    #[test]
    fn test_overfetch_bound() {
        let ad = r#"<div class="algo ads"><h3><a href="https://ads.example.com/">Ad</a></h3></div>"#;
        let html = format!("{ad}{ad}{ad}{}", organic(1));
        assert!(Yahoo.extract(&html, 1).unwrap().is_empty());
    }

    #[test]
    fn test_unwrap_redirect() {
        assert_eq!(
            unwrap_redirect("https://r.search.yahoo.com/RU=https%3a%2f%2fexample.com%2f/RK=2/RS=x"),
            "https://example.com/"
        );
        assert_eq!(
            unwrap_redirect("https://example.com/direct"),
            "https://example.com/direct"
        );
    }

    #[test]
    fn test_unwrap_click_redirect() {
        assert_eq!(
            unwrap_redirect("https://r.search.yahoo.com/cbclk/RU=https%3A%2F%2Fshop.example.com/extra"),
            "https://shop.example.com"
        );
    }

    #[test]
    fn test_skips_missing_title() {
        let html = r#"<div class="algo"><a href="https://example.com/">x</a></div>"#;
        assert!(Yahoo.extract(html, 5).unwrap().is_empty());
    }
}
