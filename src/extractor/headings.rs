//! Heading-proximity pass
//!
//! Many recipe blogs have no recipe markup at all, only a heading such as
//! "Ingredients" or "Hozzávalók" followed by a list or paragraph. Labels are
//! tried in configuration order; for each label, headings are scanned in
//! document order and the element right after the first matching heading
//! supplies the value.

use dom_query::{Document, Selection};
use tracing::debug;

use super::state::{Field, PartialRecipe};
use crate::dom;
use crate::Options;

/// Run the heading-proximity pass for ingredients and instructions.
#[must_use]
pub fn pass(doc: &Document, opts: &Options, current: &PartialRecipe) -> Option<PartialRecipe> {
    let wanted = [
        (Field::Ingredients, &opts.ingredient_labels),
        (Field::Instructions, &opts.instruction_labels),
    ];
    if wanted.iter().all(|(field, _)| !current.is_missing(*field)) {
        return None;
    }

    let headings = dom::select_all(doc, &opts.heading_selector());
    if headings.is_empty() {
        return None;
    }

    let mut update = PartialRecipe::default();
    for (field, labels) in wanted {
        if current.is_missing(field) {
            update.set(field, section_after_label(&headings, labels, field.separator()));
        }
    }
    update.into_update()
}

/// Text of the section following the first heading that carries a label.
#[must_use]
pub fn section_after_label(headings: &[Selection], labels: &[String], separator: &str) -> Option<String> {
    labels.iter().find_map(|label| {
        let needle = label.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        headings
            .iter()
            .filter(|heading| dom::text_content(heading).to_lowercase().contains(&needle))
            .find_map(|heading| {
                let text = following_section_text(heading, separator)?;
                debug!(label = label.as_str(), "heading matched");
                Some(text)
            })
    })
}

/// Text of the element right after `heading`.
///
/// Lists are read item by item so entries keep their separator.
fn following_section_text(heading: &Selection, separator: &str) -> Option<String> {
    let next = dom::next_element_sibling(heading)?;

    let text = match dom::tag_name(&next).as_deref() {
        Some("ul" | "ol") => {
            let items: Vec<String> = dom::select_within(&next, "li")
                .iter()
                .map(dom::collapsed_text)
                .filter(|t| !t.is_empty())
                .collect();
            if items.is_empty() {
                dom::collapsed_text(&next)
            } else {
                items.join(separator)
            }
        }
        _ => dom::collapsed_text(&next),
    };

    (!text.is_empty()).then_some(text)
}
