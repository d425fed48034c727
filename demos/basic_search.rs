//! Example: one query against several providers.

use websearch::{search, SearchOutput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Basic usage
    let results = search("google", 3, "rust programming", false, false).await;
    println!("Found {} results", results.len());
    for result in results.results() {
        println!("{}", result.title);
        println!("{}", result.link);
        println!();
    }

    // Different provider
    let yahoo = search("yahoo", 2, "machine learning", false, false).await;
    println!("Yahoo found {} results", yahoo.len());

    // Full description from the result page
    let full = search("bing", 1, "web development", true, false).await;
    if let Some(first) = full.results().first() {
        let preview: String = first.description.chars().take(100).collect();
        println!("Description: {}...", preview);
    }

    // Raw HTML
    if let SearchOutput::Raw(html) = search("duckduckgo", 5, "data science", false, true).await {
        println!("HTML length: {}", html.len());
    }

    // Several providers, same query
    for provider in ["google", "yahoo", "bing"] {
        let results = search(provider, 1, "artificial intelligence", false, false).await;
        match results.results().first() {
            Some(first) => println!("{}: {}", provider, first.title),
            None => println!("{}: no results", provider),
        }
    }

    Ok(())
}
