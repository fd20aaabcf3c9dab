//! Compiled regex patterns and CSS selectors for recipe extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// Any run of whitespace (spaces, tabs, newlines, NBSP).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Text that looks like it carries markup or entities and needs an HTML parse
/// before it can be used as plain text (common in JSON-LD values).
pub static MARKUP_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z/!]|&[#a-zA-Z0-9]+;").expect("MARKUP_HINT regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Embedded structured-data blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Elements whose text never belongs to recipe content.
pub const NON_CONTENT_SELECTOR: &str = "script, style, noscript, template, svg";

/// Collapse every whitespace run to a single space and trim the ends.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::patterns::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Mix\n\tthe   flour "), "Mix the flour");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
