//! Page retrieval.
//!
//! One GET per call, no retries and no caching. Any failure (DNS, TLS,
//! timeout, non-2xx status, unreadable body) becomes [`Error::Fetch`] carrying
//! the URL that was requested.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("recipe-scraper/", env!("CARGO_PKG_VERSION"));

/// HTTP settings for the fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout. Default: 30 s.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Retrieves raw HTML for a URL.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be constructed.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `url` and return its body decoded to UTF-8.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`] when `url` is not an absolute http(s) URL
    /// * [`Error::Fetch`] for every transport or status failure
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = url_utils::parse_source_url(url)?;
        let fetch_err = |reason: String| Error::Fetch { url: url.trim().to_string(), reason };

        debug!(url = %parsed, "fetching page");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url, error = %e, "request failed");
            fetch_err(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "non-success status");
            return Err(fetch_err(format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| {
            warn!(url, error = %e, "reading body failed");
            fetch_err(format!("reading body: {e}"))
        })?;

        debug!(url, bytes = bytes.len(), "page fetched");
        Ok(encoding::decode_html(&bytes, content_type.as_deref()))
    }
}
