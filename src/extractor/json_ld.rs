//! Structured-data pass (JSON-LD)
//!
//! Reads schema.org `Recipe` markup from `<script type="application/ld+json">`
//! blocks. Blocks that do not parse are skipped. Recipe nodes are searched in
//! top-level objects, arrays, `@graph` containers and nested values such as
//! `WebPage.mainEntity`; the first one in document order wins.

use dom_query::Document;
use serde_json::{Map, Value};
use tracing::debug;

use super::state::{Field, PartialRecipe};
use crate::dom;
use crate::patterns::{collapse_whitespace, JSON_LD_SELECTOR, MARKUP_HINT};
use crate::Options;

/// Run the structured-data pass.
///
/// Sets the title from `name`, ingredients from `recipeIngredient` and
/// instructions from `recipeInstructions` for every field still missing.
#[must_use]
pub fn pass(doc: &Document, _opts: &Options, current: &PartialRecipe) -> Option<PartialRecipe> {
    let recipe = find_recipe(doc)?;
    let mut update = PartialRecipe::default();

    if current.is_missing(Field::Title) {
        update.set(Field::Title, recipe_name(&recipe));
    }
    if current.is_missing(Field::Ingredients) {
        update.set(Field::Ingredients, recipe_ingredients(&recipe));
    }
    if current.is_missing(Field::Instructions) {
        update.set(Field::Instructions, recipe_instructions(&recipe));
    }

    update.into_update()
}

/// Find the first schema.org `Recipe` object embedded in the document.
#[must_use]
pub fn find_recipe(doc: &Document) -> Option<Map<String, Value>> {
    for script in dom::select_all(doc, JSON_LD_SELECTOR) {
        let json_text = dom::text_content(&script);
        let json_text = json_text.trim();

        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(json_text) {
            Ok(v) => v,
            Err(err) => {
                debug!(%err, "skipping unparseable JSON-LD block");
                continue;
            }
        };

        if let Some(recipe) = find_recipe_node(&data) {
            return Some(recipe.clone());
        }
    }

    None
}

/// Recursively search a JSON-LD value for a Recipe object.
fn find_recipe_node(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) => {
            if has_type(map, "recipe") {
                return Some(map);
            }
            map.values().find_map(find_recipe_node)
        }
        Value::Array(items) => items.iter().find_map(find_recipe_node),
        _ => None,
    }
}

/// Get lowercase `@type` values from a schema object.
fn schema_types(map: &Map<String, Value>) -> Vec<String> {
    match map.get("@type") {
        Some(Value::String(s)) => vec![s.to_lowercase()],
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether the object declares `expected` (lowercase) as one of its types.
///
/// Accepts prefixed forms such as `schema:Recipe` and `http://schema.org/Recipe`.
fn has_type(map: &Map<String, Value>, expected: &str) -> bool {
    schema_types(map).iter().any(|t| {
        t == expected
            || t.rsplit(['/', ':', '#'])
                .next()
                .is_some_and(|last| last == expected)
    })
}

fn recipe_name(recipe: &Map<String, Value>) -> Option<String> {
    recipe.get("name").and_then(Value::as_str).map(plain_text)
}

/// Ingredient entries joined with `", "`.
fn recipe_ingredients(recipe: &Map<String, Value>) -> Option<String> {
    let value = recipe
        .get("recipeIngredient")
        .or_else(|| recipe.get("ingredients"))?;

    let entries: Vec<String> = match value {
        Value::String(s) => s.lines().map(plain_text).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(plain_text(s)),
                Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(plain_text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    join_non_empty(entries, Field::Ingredients.separator())
}

/// Instruction step texts joined with newlines.
fn recipe_instructions(recipe: &Map<String, Value>) -> Option<String> {
    let value = recipe.get("recipeInstructions")?;
    let mut steps = Vec::new();
    collect_steps(value, &mut steps);
    join_non_empty(steps, Field::Instructions.separator())
}

/// Flatten strings, `HowToStep`s and `HowToSection`s into step texts.
fn collect_steps(value: &Value, steps: &mut Vec<String>) {
    match value {
        Value::String(s) => steps.extend(text_steps(s)),
        Value::Array(items) => {
            for item in items {
                collect_steps(item, steps);
            }
        }
        Value::Object(obj) => {
            if let Some(children) = obj.get("itemListElement") {
                collect_steps(children, steps);
            } else if let Some(text) = obj.get("text").and_then(Value::as_str) {
                steps.push(plain_text(text));
            } else if let Some(name) = obj.get("name").and_then(Value::as_str) {
                steps.push(plain_text(name));
            }
        }
        _ => {}
    }
}

/// Split a free-text instruction block into steps.
///
/// Markup is parsed and split on list items/paragraphs; plain text is split
/// on line breaks.
fn text_steps(text: &str) -> Vec<String> {
    if !MARKUP_HINT.is_match(text) {
        return text.lines().map(collapse_whitespace).collect();
    }

    let fragment = Document::from(format!("<div>{text}</div>"));
    let parts: Vec<String> = dom::select_all(&fragment, "li, p")
        .iter()
        .map(dom::collapsed_text)
        .collect();

    if parts.iter().any(|p| !p.is_empty()) {
        parts
    } else {
        vec![plain_text(text)]
    }
}

/// Convert a JSON-LD string value to collapsed plain text, decoding any
/// entities and dropping tags.
fn plain_text(text: &str) -> String {
    if !MARKUP_HINT.is_match(text) {
        return collapse_whitespace(text);
    }
    let fragment = Document::from(format!("<div>{text}</div>"));
    dom::select_first(&fragment, "body")
        .map(|body| dom::collapsed_text(&body))
        .unwrap_or_else(|| collapse_whitespace(text))
}

fn join_non_empty(parts: Vec<String>, separator: &str) -> Option<String> {
    let parts: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    (!parts.is_empty()).then(|| parts.join(separator))
}
