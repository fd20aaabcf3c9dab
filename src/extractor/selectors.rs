//! Selector-cascade pass
//!
//! Walks the ordered selector lists from [`Options`]. For each field the first
//! selector that matches at least one element with text wins; later selectors
//! are never consulted for that field.

use dom_query::Document;
use tracing::debug;

use super::state::{Field, PartialRecipe};
use crate::dom;
use crate::patterns::collapse_whitespace;
use crate::Options;

/// Run the selector-cascade pass for every field still missing.
#[must_use]
pub fn pass(doc: &Document, opts: &Options, current: &PartialRecipe) -> Option<PartialRecipe> {
    let mut update = PartialRecipe::default();

    if current.is_missing(Field::Ingredients) {
        update.set(
            Field::Ingredients,
            first_list_match(doc, &opts.ingredient_selectors, Field::Ingredients.separator()),
        );
    }
    if current.is_missing(Field::Instructions) {
        update.set(
            Field::Instructions,
            first_list_match(doc, &opts.instruction_selectors, Field::Instructions.separator()),
        );
    }
    if current.is_missing(Field::FullText) {
        update.set(Field::FullText, first_container_text(doc, &opts.container_selectors));
    }

    update.into_update()
}

/// Texts of every element matched by the first productive selector, joined.
#[must_use]
pub fn first_list_match(doc: &Document, selectors: &[String], separator: &str) -> Option<String> {
    selectors.iter().find_map(|selector| {
        let texts: Vec<String> = dom::select_all(doc, selector)
            .iter()
            .map(dom::collapsed_text)
            .filter(|t| !t.is_empty())
            .collect();

        if texts.is_empty() {
            return None;
        }
        debug!(selector = selector.as_str(), matches = texts.len(), "list selector matched");
        Some(texts.join(separator))
    })
}

/// Text of every element matched by the first productive selector, joined
/// with a space and collapsed.
#[must_use]
pub fn first_container_text(doc: &Document, selectors: &[String]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        let texts: Vec<String> = dom::select_all(doc, selector)
            .iter()
            .map(dom::collapsed_text)
            .filter(|t| !t.is_empty())
            .collect();

        if texts.is_empty() {
            return None;
        }
        debug!(selector = selector.as_str(), matches = texts.len(), "container selector matched");
        Some(collapse_whitespace(&texts.join(" ")))
    })
}
