//! websearch CLI - query one search provider from the command line.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use websearch::{Provider, SearchOutput, SearchRequest, WebSearch};

/// websearch - search Google, Yahoo, Bing, DuckDuckGo or Brave
#[derive(Parser)]
#[command(name = "websearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    #[arg(required_unless_present = "providers")]
    query: Option<String>,

    /// Provider to query: google, yahoo, bing, duckduckgo, brave
    #[arg(short, long, default_value = "google")]
    provider: String,

    /// Maximum number of results
    #[arg(short, long, default_value = "5")]
    limit: usize,

    /// Fetch each result page and use its text as the description
    #[arg(long)]
    full: bool,

    /// Print the provider's raw HTML instead of results
    #[arg(long)]
    raw: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// List available providers
    #[arg(long)]
    providers: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    if cli.providers {
        list_providers();
        return Ok(());
    }

    let query = cli.query.clone().unwrap_or_default();
    run_search(&cli, &query).await
}

fn list_providers() {
    println!("Available providers:\n");
    for provider in Provider::ALL {
        println!("  {:<11} {}", provider.name(), provider.config().base_url);
    }
    println!();
    println!("Usage: websearch \"query\" -p duckduckgo -l 3");
}

async fn run_search(cli: &Cli, query: &str) -> Result<()> {
    let request = SearchRequest::new(query)
        .with_limit(cli.limit)
        .with_full_description(cli.full)
        .with_raw_html(cli.raw);

    let output = WebSearch::new().search_by_name(&cli.provider, request).await;

    let results = match output {
        SearchOutput::Raw(html) => {
            println!("{}", html);
            return Ok(());
        }
        SearchOutput::Results(results) => results,
    };

    match cli.format {
        OutputFormat::Text => {
            println!(
                "\n{} results for \"{}\" from {}:\n",
                results.len(),
                query,
                cli.provider
            );
            for (i, result) in results.iter().enumerate() {
                println!("{}. {}", i + 1, result.title);
                println!("   URL: {}", result.link);
                if !result.description.is_empty() {
                    let description: String = result.description.chars().take(150).collect();
                    if description.len() < result.description.len() {
                        println!("   {}...", description);
                    } else {
                        println!("   {}", description);
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Compact => {
            for result in &results {
                println!("{}\t{}", result.title, result.link);
            }
        }
    }

    Ok(())
}
