//! DOM Operations Adapter
//!
//! Small set of helpers over the `dom_query` crate used by the extraction
//! passes. Selectors coming from [`crate::Options`] are user-supplied, so every
//! query goes through `try_select` and an invalid selector simply matches
//! nothing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::patterns;

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with every whitespace run collapsed to one space, trimmed.
#[must_use]
pub fn collapsed_text(sel: &Selection) -> String {
    patterns::collapse_whitespace(&sel.text())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Get next element sibling (skipping text and comment nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// All elements matching `selector`, in document order, one selection each.
///
/// An invalid selector yields an empty list.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.try_select(selector)
        .map(|sel| sel.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

/// Descendants of `root` matching `selector`, one selection each.
#[must_use]
pub fn select_within<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.try_select(selector)
        .map(|sel| sel.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

/// First element matching `selector`, if any.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    select_all(doc, selector).into_iter().next()
}

/// Remove every element matching `selector` from the document.
pub fn remove_all(doc: &Document, selector: &str) {
    if let Some(sel) = doc.try_select(selector) {
        sel.remove();
    }
}
