//! End-to-end behaviour of the extraction cascade.

use recipe_scraper::{
    extract, extract_bytes, extract_with_options, Options, FULL_TEXT_NOT_FOUND, INGREDIENTS_NOT_FOUND,
    INSTRUCTIONS_NOT_FOUND, TITLE_NOT_FOUND,
};

fn json_ld_page(json: &str, body: &str) -> String {
    format!(
        r#"<html><head><script type="application/ld+json">{json}</script></head><body>{body}</body></html>"#
    )
}

#[test]
fn unmatched_document_yields_every_sentinel() {
    let html = "<html><body><div><span>Just some words</span></div><h4>Ingredients</h4><p>x</p></body></html>";
    let options = Options { body_fallback: false, ..Options::default() };

    let result = extract_with_options(html, &options);

    assert_eq!(result.title, TITLE_NOT_FOUND);
    assert_eq!(result.ingredients, INGREDIENTS_NOT_FOUND);
    assert_eq!(result.instructions, INSTRUCTIONS_NOT_FOUND);
    assert_eq!(result.full_text, FULL_TEXT_NOT_FOUND);
    assert!(result.is_empty());
}

#[test]
fn empty_and_garbage_input_never_fail() {
    for html in ["", "   ", "<<<>>>", "<html><body></body></html>", "<p>Unclosed<div>Nested<p>Badly</body>"] {
        let result = extract(html);
        assert!(!result.title.is_empty());
        assert!(!result.ingredients.is_empty());
        assert!(!result.instructions.is_empty());
        assert!(!result.full_text.is_empty());
    }
}

#[test]
fn json_ld_recipe_fields() {
    let html = json_ld_page(
        r#"{"@context":"https://schema.org","@type":"Recipe","name":"Mix",
            "recipeIngredient":["a","b"],
            "recipeInstructions":[{"@type":"HowToStep","text":"Mix."}]}"#,
        "<article>Mix a and b.</article>",
    );

    let result = extract(&html);

    assert_eq!(result.title, "Mix");
    assert_eq!(result.ingredients, "a, b");
    assert_eq!(result.instructions, "Mix.");
    assert_eq!(result.full_text, "Mix a and b.");
}

#[test]
fn json_ld_wins_over_selectors_and_headings() {
    let html = json_ld_page(
        r#"{"@type":"Recipe","name":"Stew","recipeIngredient":["beef","carrots"],
            "recipeInstructions":"Brown the beef.\nSimmer for two hours."}"#,
        r#"<h1>My blog</h1>
           <ul class="ingredients"><li>salt</li></ul>
           <h2>Instructions</h2><p>Do something else.</p>"#,
    );

    let result = extract(&html);

    assert_eq!(result.title, "Stew");
    assert_eq!(result.ingredients, "beef, carrots");
    assert_eq!(result.instructions, "Brown the beef.\nSimmer for two hours.");
}

#[test]
fn json_ld_partial_recipe_leaves_other_fields_to_later_passes() {
    let html = json_ld_page(
        r#"{"@type":"Recipe","name":"Soup","recipeIngredient":["water","salt"]}"#,
        r#"<h2>Method</h2><p>Boil the water.</p>"#,
    );

    let result = extract(&html);

    assert_eq!(result.ingredients, "water, salt");
    assert_eq!(result.instructions, "Boil the water.");
}

#[test]
fn specific_ingredient_selector_beats_generic_container() {
    let html = r#"<html><body>
        <article>
            <p>Our favourite cake.</p>
            <ul class="ingredients">
                <li>flour</li>
                <li>sugar</li>
            </ul>
        </article>
    </body></html>"#;

    let result = extract(html);

    assert_eq!(result.ingredients, "flour, sugar");
    assert!(result.full_text.starts_with("Our favourite cake."));
}

#[test]
fn earlier_selector_in_list_wins() {
    let html = r#"<html><body>
        <div class="recipe-ingredients"><ul><li>from plugin</li></ul></div>
        <ul class="ingredients"><li>from theme</li></ul>
    </body></html>"#;

    assert_eq!(extract(html).ingredients, "from plugin");
}

#[test]
fn instruction_selector_joins_with_newlines() {
    let html = r#"<html><body>
        <ol class="instructions">
            <li>Preheat the oven.</li>
            <li>Bake for   20 minutes.</li>
        </ol>
    </body></html>"#;

    assert_eq!(extract(html).instructions, "Preheat the oven.\nBake for 20 minutes.");
}

#[test]
fn hungarian_heading_followed_by_paragraph() {
    let html = r#"<html><body>
        <h1>Piskóta</h1>
        <h2>Hozzávalók</h2>
        <p>flour, sugar</p>
    </body></html>"#;

    let result = extract(html);

    assert_eq!(result.title, "Piskóta");
    assert_eq!(result.ingredients, "flour, sugar");
}

#[test]
fn heading_pass_skipped_when_selector_matched() {
    let html = r#"<html><body>
        <ul class="ingredients"><li>eggs</li></ul>
        <h2>Hozzávalók</h2>
        <p>flour</p>
    </body></html>"#;

    assert_eq!(extract(html).ingredients, "eggs");
}

#[test]
fn heading_labels_match_case_insensitively_on_h3() {
    let html = r#"<html><body>
        <h3>ELKÉSZÍTÉS</h3>
        <ol><li>Összekeverjük.</li><li>Megsütjük.</li></ol>
    </body></html>"#;

    assert_eq!(extract(html).instructions, "Összekeverjük.\nMegsütjük.");
}

#[test]
fn full_text_whitespace_is_collapsed() {
    let html = "<html><body><article>\n\t  Line one\n\n\t\tline    two  \r\n</article></body></html>";

    assert_eq!(extract(html).full_text, "Line one line two");
}

#[test]
fn full_text_joins_every_matching_container() {
    let html = "<body><article><p>Part one.</p></article><article><p>Part two.</p></article></body>";

    let result = extract(html);

    assert_eq!(result.full_text, "Part one. Part two.");
}

#[test]
fn fallback_container_joins_every_match() {
    let html = r#"<body><nav>Menu</nav><main>First half</main><main>second   half</main></body>"#;

    assert_eq!(extract(html).full_text, "First half second half");
}

#[test]
fn title_falls_back_from_h1_to_h2() {
    assert_eq!(extract("<body><h1>First</h1><h1>Second</h1></body>").title, "First");
    assert_eq!(extract("<body><h2>Only h2</h2></body>").title, "Only h2");
    assert_eq!(extract("<body><h3>Too deep</h3></body>").title, TITLE_NOT_FOUND);
}

#[test]
fn scripts_and_styles_never_reach_full_text() {
    let html = r#"<html><body>
        <script>window.ads = [];</script>
        <style>.x { color: red }</style>
        <noscript>Enable JavaScript</noscript>
        <p>Visible</p>
    </body></html>"#;

    assert_eq!(extract(html).full_text, "Visible");
}

#[test]
fn extraction_is_idempotent() {
    let html = json_ld_page(
        r#"{"@type":"Recipe","name":"Stew","recipeIngredient":["beef"]}"#,
        r#"<article><h2>Directions</h2><p>Simmer.</p></article>"#,
    );

    let first = extract(&html);
    let second = extract(&html);

    assert_eq!(first, second);
}

#[test]
fn bytes_input_is_transcoded() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head>\
        <body><h1>Cr\xE8me br\xFBl\xE9e</h1></body></html>";

    assert_eq!(extract_bytes(html).title, "Crème brûlée");
}

#[test]
fn body_rendering_contains_every_section() {
    let html = json_ld_page(
        r#"{"@type":"Recipe","name":"Stew","recipeIngredient":["beef"],"recipeInstructions":"Simmer."}"#,
        "",
    );

    let body = extract(&html).to_body();

    assert!(body.starts_with("Title: Stew\n"));
    assert!(body.contains("Ingredients:\nbeef"));
    assert!(body.contains("Instructions:\nSimmer."));
    assert!(body.ends_with(&format!("Full text:\n{FULL_TEXT_NOT_FOUND}")));
}

#[test]
fn result_serialises_camel_case() {
    let json = serde_json::to_value(extract("<body><h1>T</h1></body>")).unwrap_or_default();

    assert_eq!(json["title"], "T");
    assert!(json.get("fullText").is_some());
}
