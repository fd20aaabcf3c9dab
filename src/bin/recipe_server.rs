//! Recipe API server.
//!
//! Every flag can also be set through the environment (or a `.env` file).

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_scraper::server;
use recipe_scraper::{
    FetchConfig, Fetcher, LlmNormalizer, NormalizerConfig, RecipeService, RecipeStore, ServiceConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the recipe API.
#[derive(Parser, Debug)]
#[command(name = "recipe_server", version, about = "Scrape recipe pages into a small CRUD API")]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// SQLite database file.
    #[arg(long, env = "DATABASE_URL", default_value = "recipes.db")]
    database: PathBuf,

    /// Allowed CORS origin. Any origin is allowed when unset.
    #[arg(long, env = "CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Page fetch timeout in seconds.
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    fetch_timeout: u64,

    /// Deadline for a whole add-recipe request in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 90)]
    request_timeout: u64,

    /// Clean up extracted text with a language model before storing it.
    #[arg(long, env = "NORMALIZE")]
    normalize: bool,

    /// LLM provider for --normalize (openai, anthropic, gemini, ...).
    /// Auto-detected from API key variables when unset.
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

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let store = RecipeStore::open(&cli.database)
        .with_context(|| format!("opening database {}", cli.database.display()))?;
    let fetcher = Fetcher::new(&FetchConfig {
        timeout: Duration::from_secs(cli.fetch_timeout),
        ..FetchConfig::default()
    })?;

    let config = ServiceConfig {
        request_timeout: Duration::from_secs(cli.request_timeout),
        normalize: cli.normalize,
    };
    let mut service = RecipeService::new(fetcher, store, config);
    if cli.normalize {
        let normalizer =
            LlmNormalizer::from_env(cli.provider.as_deref(), cli.model.as_deref(), NormalizerConfig::default())
                .context("setting up normaliser")?;
        service = service.with_normalizer(Arc::new(normalizer));
    }

    let app = server::router(Arc::new(service), cli.cors_origin.as_deref())?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, database = %cli.database.display(), normalize = cli.normalize, "server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
