//! URL Utility Functions
//!
//! Validation of the recipe links callers submit. Only absolute `http` and
//! `https` URLs with a host are fetched.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            (true, Some(url))
        }
        _ => (false, None),
    }
}

/// Parse a recipe link, rejecting anything that cannot be fetched.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the link is empty, relative, not
/// http(s), or has no host.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::url_utils::parse_source_url;
///
/// assert!(parse_source_url("https://example.com/stew").is_ok());
/// assert!(parse_source_url("/stew").is_err());
/// ```
pub fn parse_source_url(link: &str) -> Result<Url> {
    match is_absolute_url(link) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::Validation(format!(
            "link must be an absolute http(s) URL, got '{}'",
            link.trim()
        ))),
    }
}

/// Extract the hostname (lowercase, without `www.`) from a URL string.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let (_, url) = is_absolute_url(url_str);
    let host = url?.host_str()?.to_ascii_lowercase();
    Some(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}
