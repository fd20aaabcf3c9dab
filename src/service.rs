//! Recipe operations: list, add by link, replace body.
//!
//! `add` is the only operation that touches the network. It runs
//! fetch, extract and (optionally) normalise in sequence under one deadline,
//! and writes to the store only once all of them have succeeded.
//!
//! SQLite calls block, so every store access runs on tokio's blocking pool.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::normalize::Normalizer;
use crate::store::{RecipeRecord, RecipeStore};
use crate::url_utils;
use crate::{extract_with_options, Options};

/// Service-level settings.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Deadline for fetch + extract + normalise. Default: 90 s.
    pub request_timeout: Duration,
    /// Run the normaliser on extracted text. Default: false.
    pub normalize: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { request_timeout: Duration::from_secs(90), normalize: false }
    }
}

/// Payload for adding a recipe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRecipe {
    pub link: Option<String>,
    pub name: Option<String>,
}

/// Payload for replacing a recipe body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecipe {
    pub body: Option<String>,
}

/// Orchestrates the fetcher, extractor, normaliser and store.
pub struct RecipeService {
    fetcher: Fetcher,
    store: Arc<RecipeStore>,
    normalizer: Option<Arc<dyn Normalizer>>,
    options: Options,
    config: ServiceConfig,
}

impl std::fmt::Debug for RecipeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeService")
            .field("has_normalizer", &self.normalizer.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RecipeService {
    #[must_use]
    pub fn new(fetcher: Fetcher, store: RecipeStore, config: ServiceConfig) -> Self {
        Self { fetcher, store: Arc::new(store), normalizer: None, options: Options::default(), config }
    }

    /// Attach the normaliser used when [`ServiceConfig::normalize`] is set.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Replace the extraction options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Every stored recipe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] on query failure.
    pub async fn list(&self) -> Result<Vec<RecipeRecord>> {
        self.with_store(RecipeStore::list).await
    }

    /// Scrape `link` and store the result under `name`.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`] for a missing or blank `link` or `name`
    /// * [`Error::Fetch`], [`Error::Normalization`], [`Error::Timeout`] or
    ///   [`Error::Storage`] when a stage fails; nothing is stored then
    pub async fn add(&self, input: NewRecipe) -> Result<RecipeRecord> {
        let link = required(input.link, "link")?;
        let name = required(input.name, "name")?;
        let host = url_utils::extract_hostname(&link).unwrap_or_default();
        info!(%link, %name, %host, "adding recipe");

        let secs = self.config.request_timeout.as_secs();
        let body = match tokio::time::timeout(self.config.request_timeout, self.scrape(&link)).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                warn!(%link, error = %e, "scrape failed");
                return Err(e);
            }
            Err(_) => {
                warn!(%link, secs, "scrape deadline exceeded");
                return Err(Error::Timeout { secs });
            }
        };

        let stored_link = link.clone();
        let record = self
            .with_store(move |store| store.insert(&name, &body, &stored_link))
            .await?;
        info!(id = record.id, %link, "recipe stored");
        Ok(record)
    }

    /// Replace the body of recipe `id`.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`] when `body` is absent
    /// * [`Error::NotFound`] when no recipe has that id
    pub async fn update(&self, id: i64, input: UpdateRecipe) -> Result<RecipeRecord> {
        let body = input.body.ok_or_else(|| Error::Validation("body is required".into()))?;
        let record = self
            .with_store(move |store| store.update_body(id, &body))
            .await?
            .ok_or(Error::NotFound(id))?;
        info!(id, "recipe body updated");
        Ok(record)
    }

    /// Run `op` against the store on the blocking pool.
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&RecipeStore) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&*store))
            .await
            .map_err(|e| Error::Storage(format!("store task failed: {e}")))?
    }

    async fn scrape(&self, link: &str) -> Result<String> {
        let html = self.fetcher.fetch(link).await?;
        let extracted = extract_with_options(&html, &self.options);
        info!(
            %link,
            title = extracted.has_title(),
            ingredients = extracted.has_ingredients(),
            instructions = extracted.has_instructions(),
            "recipe extracted"
        );
        let body = extracted.to_body();

        if !self.config.normalize {
            return Ok(body);
        }
        let normalizer = self
            .normalizer
            .as_ref()
            .ok_or_else(|| Error::Config("normalisation enabled but no normaliser configured".into()))?;
        normalizer.normalize(&body).await
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Validation(format!("{field} is required")))
}
