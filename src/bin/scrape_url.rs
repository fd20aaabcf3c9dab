//! Fetch one recipe page and print what the extractor finds.
//!
//! Nothing is stored. Useful for checking a site before adding it.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_scraper::{
    extract_with_options, FetchConfig, Fetcher, LlmNormalizer, Normalizer, NormalizerConfig, Options,
};
use tracing_subscriber::EnvFilter;

/// Scrape a recipe page and print the extracted fields.
#[derive(Parser, Debug)]
#[command(name = "scrape_url", version, about = "Scrape a recipe page and print the extracted fields")]
struct Cli {
    /// Recipe page URL.
    url: String,

    /// Print JSON instead of the plain-text body.
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds.
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    fetch_timeout: u64,

    /// Skip the whole-body fallback for the full text.
    #[arg(long)]
    no_body_fallback: bool,

    /// Pass the extracted body through a language model.
    #[arg(long, env = "NORMALIZE")]
    normalize: bool,

    /// LLM provider for --normalize. Auto-detected when unset.
    #[arg(long, env = "EDGEQUAKE_PROVIDER")]
    provider: Option<String>,

    /// Model for --normalize.
    #[arg(long, env = "EDGEQUAKE_MODEL")]
    model: Option<String>,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let fetcher = Fetcher::new(&FetchConfig {
        timeout: Duration::from_secs(cli.fetch_timeout),
        ..FetchConfig::default()
    })?;
    let html = fetcher
        .fetch(&cli.url)
        .await
        .with_context(|| format!("fetching {}", cli.url))?;

    let options = Options { body_fallback: !cli.no_body_fallback, ..Options::default() };
    let result = extract_with_options(&html, &options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result).context("serialising result")?);
    } else if cli.normalize {
        let normalizer =
            LlmNormalizer::from_env(cli.provider.as_deref(), cli.model.as_deref(), NormalizerConfig::default())
                .context("setting up normaliser")?;
        println!("{}", normalizer.normalize(&result.to_body()).await?);
    } else {
        println!("{}", result.to_body());
    }
    Ok(())
}
