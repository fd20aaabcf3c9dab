//! Whole-page fallback pass
//!
//! Only runs when no recipe container matched. Tries broad page containers
//! and finally, when enabled, the whole `<body>`.

use dom_query::Document;
use tracing::debug;

use super::selectors::first_container_text;
use super::state::{Field, PartialRecipe};
use crate::dom;
use crate::Options;

/// Fill `fullText` from a broad container or the document body.
#[must_use]
pub fn pass(doc: &Document, opts: &Options, current: &PartialRecipe) -> Option<PartialRecipe> {
    if !current.is_missing(Field::FullText) {
        return None;
    }

    let text = first_container_text(doc, &opts.fallback_containers).or_else(|| {
        if opts.body_fallback {
            debug!("falling back to whole body text");
            body_text(doc)
        } else {
            None
        }
    })?;

    Some(PartialRecipe::with(Field::FullText, text))
}

/// Whitespace-collapsed text of the whole `<body>`.
#[must_use]
pub fn body_text(doc: &Document) -> Option<String> {
    let body = dom::select_first(doc, "body")?;
    let text = dom::collapsed_text(&body);
    (!text.is_empty()).then_some(text)
}
