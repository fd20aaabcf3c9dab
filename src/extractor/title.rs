//! Title resolution.
//!
//! The structured-data pass may already have supplied a title; otherwise the
//! first non-empty `h1` is used, then the first non-empty `h2`.

use dom_query::Document;

use super::state::{Field, PartialRecipe};
use crate::dom;
use crate::Options;

const TITLE_TAGS: [&str; 2] = ["h1", "h2"];

/// Fill the title from page headings.
#[must_use]
pub fn pass(doc: &Document, _opts: &Options, current: &PartialRecipe) -> Option<PartialRecipe> {
    if !current.is_missing(Field::Title) {
        return None;
    }
    heading_title(doc).map(|title| PartialRecipe::with(Field::Title, title))
}

/// First non-empty `h1`, else first non-empty `h2`.
#[must_use]
pub fn heading_title(doc: &Document) -> Option<String> {
    TITLE_TAGS.iter().find_map(|tag| {
        dom::select_all(doc, tag)
            .iter()
            .map(dom::collapsed_text)
            .find(|t| !t.is_empty())
    })
}
