//! Extraction pipeline
//!
//! The cascade is an ordered list of pure pass functions. Each pass sees the
//! document and the fields found so far and may propose values for fields that
//! are still missing. Structured data is read from the untouched document;
//! non-content elements are then removed before the DOM-based passes run.

use dom_query::Document;
use tracing::debug;

use super::state::PartialRecipe;
use super::{fallback, headings, json_ld, selectors, title};
use crate::dom;
use crate::patterns::NON_CONTENT_SELECTOR;
use crate::result::ExtractionResult;
use crate::Options;

/// Signature shared by every extraction pass.
///
/// Returns `None` when the pass found nothing new.
pub type PassFn = fn(&Document, &Options, &PartialRecipe) -> Option<PartialRecipe>;

/// A named step of the cascade.
#[derive(Clone, Copy)]
pub struct Pass {
    /// Name used in logs.
    pub name: &'static str,
    /// The pass function.
    pub run: PassFn,
}

/// Passes that need `<script>` contents, run on the raw document.
pub const STRUCTURED_PASSES: &[Pass] = &[Pass { name: "json_ld", run: json_ld::pass }];

/// Passes run after non-content elements are stripped, in priority order.
pub const DOM_PASSES: &[Pass] = &[
    Pass { name: "selectors", run: selectors::pass },
    Pass { name: "headings", run: headings::pass },
    Pass { name: "fallback", run: fallback::pass },
    Pass { name: "title", run: title::pass },
];

/// Extract a recipe from an HTML string.
///
/// Never fails: fields without content carry their sentinel.
#[must_use]
pub fn extract_recipe(html: &str, options: &Options) -> ExtractionResult {
    let doc = dom::parse(html);
    let mut recipe = PartialRecipe::default();

    run_passes(&doc, options, &mut recipe, STRUCTURED_PASSES);
    dom::remove_all(&doc, NON_CONTENT_SELECTOR);
    run_passes(&doc, options, &mut recipe, DOM_PASSES);

    recipe.into_result()
}

/// Apply `passes` in order, merging each update into `recipe`.
pub fn run_passes(doc: &Document, options: &Options, recipe: &mut PartialRecipe, passes: &[Pass]) {
    for pass in passes {
        if recipe.is_complete() {
            break;
        }
        match (pass.run)(doc, options, recipe) {
            Some(update) => {
                debug!(pass = pass.name, fields = ?update.found_fields(), "pass matched");
                recipe.merge(update);
            }
            None => debug!(pass = pass.name, "pass found nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::state::Field;
    use crate::result::{FULL_TEXT_NOT_FOUND, INSTRUCTIONS_NOT_FOUND};

    #[test]
    fn test_script_text_never_leaks() {
        let result = extract_recipe(
            "<body><script>var tracking = 1;</script><style>p{}</style><p>Real text</p></body>",
            &Options::default(),
        );
        assert_eq!(result.full_text, "Real text");
    }

    #[test]
    fn test_json_ld_read_before_scripts_removed() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type":"Recipe","name":"Stew","recipeIngredient":["beef"],"recipeInstructions":"Simmer."}</script>
            </head><body><h1>Blog heading</h1><article>Stew story</article></body></html>"#;
        let result = extract_recipe(html, &Options::default());
        assert_eq!(result.title, "Stew");
        assert_eq!(result.ingredients, "beef");
        assert_eq!(result.instructions, "Simmer.");
        assert_eq!(result.full_text, "Stew story");
    }

    #[test]
    fn test_passes_fill_fields_independently() {
        let html = r#"<body>
            <h1>Pogácsa</h1>
            <ul class="ingredients"><li>flour</li></ul>
            <h2>Elkészítés</h2><p>Bake it.</p>
        </body>"#;
        let opts = Options { body_fallback: false, ..Options::default() };
        let result = extract_recipe(html, &opts);
        assert_eq!(result.title, "Pogácsa");
        assert_eq!(result.ingredients, "flour");
        assert_eq!(result.instructions, "Bake it.");
        assert_eq!(result.full_text, FULL_TEXT_NOT_FOUND);
    }

    #[test]
    fn test_run_passes_stops_when_complete() {
        fn fills_everything(_: &Document, _: &Options, _: &PartialRecipe) -> Option<PartialRecipe> {
            let mut all = PartialRecipe::default();
            for field in Field::ALL {
                all.set(field, Some("x".into()));
            }
            Some(all)
        }
        fn must_not_run(_: &Document, _: &Options, _: &PartialRecipe) -> Option<PartialRecipe> {
            Some(PartialRecipe::with(Field::Instructions, "late"))
        }

        let doc = dom::parse("<p></p>");
        let mut recipe = PartialRecipe::default();
        run_passes(
            &doc,
            &Options::default(),
            &mut recipe,
            &[
                Pass { name: "all", run: fills_everything },
                Pass { name: "late", run: must_not_run },
            ],
        );
        assert_eq!(recipe.get(Field::Instructions), Some("x"));
    }

    #[test]
    fn test_empty_document() {
        let result = extract_recipe("", &Options::default());
        assert_eq!(result.instructions, INSTRUCTIONS_NOT_FOUND);
        assert!(result.is_empty());
    }
}
