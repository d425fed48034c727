//! Full-description extraction from a result's own page.
//!
//! The description is the first few sizeable text blocks of the page,
//! ignoring script and style content. Any failure yields an empty string.

use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::fetcher::{FetchRequest, PageFetcher};
use crate::user_agent::random_user_agent;
use crate::SearchOptions;

/// Limits applied when building a full description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionOptions {
    /// Timeout for the page request.
    pub timeout: Duration,
    /// Maximum number of text blocks joined together.
    pub max_blocks: usize,
    /// A block must be longer than this many characters.
    pub min_chars: usize,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self::from(&SearchOptions::default())
    }
}

impl From<&SearchOptions> for DescriptionOptions {
    fn from(options: &SearchOptions) -> Self {
        Self {
            timeout: Duration::from_secs(options.description_timeout_secs),
            max_blocks: options.description_max_blocks,
            min_chars: options.description_min_chars,
        }
    }
}

/// Fetches `url` with a fresh User-Agent and extracts its description.
///
/// Returns an empty string if the page cannot be fetched.
pub async fn fetch_full_description(
    fetcher: &dyn PageFetcher,
    url: &str,
    options: &DescriptionOptions,
) -> String {
    let request = FetchRequest::get(url)
        .with_headers(vec![(
            "User-Agent".to_string(),
            random_user_agent().to_string(),
        )])
        .with_timeout(options.timeout);

    match fetcher.fetch(&request).await {
        Ok(html) => extract_description(&html, options),
        Err(e) => {
            trace!(url, error = %e, "full description fetch failed");
            String::new()
        }
    }
}

/// Joins the text of the first `max_blocks` paragraph, div, article and
/// section elements whose text is longer than `min_chars`.
///
/// Nested blocks are counted separately, so an outer `div` repeats the text
/// of the paragraphs inside it.
pub fn extract_description(html: &str, options: &DescriptionOptions) -> String {
    let Ok(blocks) = Selector::parse("p, div, article, section") else {
        return String::new();
    };
    let document = Html::parse_document(html);

    document
        .select(&blocks)
        .map(visible_text)
        .filter(|text| text.chars().count() > options.min_chars)
        .take(options.max_blocks)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of `element` outside any `script` or `style`, whitespace collapsed.
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| matches!(el.name(), "script" | "style"))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
