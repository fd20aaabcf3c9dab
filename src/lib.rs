//! # recipe-scraper
//!
//! Fetch a recipe page, pull out its title, ingredients and instructions, and
//! keep the result in a small recipe store behind an HTTP API.
//!
//! ## Quick Start
//!
//! ```rust
//! use recipe_scraper::extract;
//!
//! let html = r#"<html><body><h1>Pancakes</h1>
//! <ul class="ingredients"><li>flour</li><li>milk</li></ul>
//! <h2>Method</h2><p>Whisk and fry.</p></body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.title, "Pancakes");
//! assert_eq!(result.ingredients, "flour, milk");
//! assert_eq!(result.instructions, "Whisk and fry.");
//! ```
//!
//! ## Extraction order
//!
//! Each field keeps the first value found by, in order:
//!
//! 1. schema.org `Recipe` JSON-LD
//! 2. recipe-specific CSS selectors
//! 3. the element after an "Ingredients" / "Instructions" style heading
//! 4. broad containers, then the whole body (full text only)
//!
//! The title falls back to the first `h1`, then `h2`. Anything still missing
//! is reported with a fixed sentinel string, so extraction never fails.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Shared regular expressions and text helpers.
pub mod patterns;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL validation for recipe links.
pub mod url_utils;

/// The extraction cascade.
pub mod extractor;

/// HTTP page retrieval.
pub mod fetch;

/// Prompts for the normalisation stage.
pub mod prompts;

/// Optional language-model clean-up of extracted text.
pub mod normalize;

/// SQLite recipe storage.
pub mod store;

/// Add/list/update operations.
pub mod service;

/// HTTP router.
pub mod server;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{FetchConfig, Fetcher};
pub use normalize::{LlmNormalizer, Normalizer, NormalizerConfig};
pub use options::Options;
pub use result::{
    ExtractionResult, FULL_TEXT_NOT_FOUND, INGREDIENTS_NOT_FOUND, INSTRUCTIONS_NOT_FOUND, TITLE_NOT_FOUND,
};
pub use service::{NewRecipe, RecipeService, ServiceConfig, UpdateRecipe};
pub use store::{RecipeRecord, RecipeStore};

/// Extracts a recipe from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::{extract, INGREDIENTS_NOT_FOUND};
///
/// let result = extract("<html><body><p>Nothing here</p></body></html>");
/// assert_eq!(result.ingredients, INGREDIENTS_NOT_FOUND);
/// assert_eq!(result.full_text, "Nothing here");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts a recipe from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::{extract_with_options, Options, FULL_TEXT_NOT_FOUND};
///
/// let options = Options { body_fallback: false, ..Options::default() };
/// let result = extract_with_options("<body><p>Loose text</p></body>", &options);
/// assert_eq!(result.full_text, FULL_TEXT_NOT_FOUND);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    extractor::extract_recipe(html, options)
}

/// Extracts a recipe from HTML bytes, detecting the encoding from `<meta>`
/// declarations and defaulting to UTF-8.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9 au lait</h1></body></html>";
/// assert_eq!(extract_bytes(html).title, "Café au lait");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractionResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Byte-input variant of [`extract_with_options`].
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractionResult {
    let html = encoding::decode_html(html, None);
    extract_with_options(&html, options)
}
