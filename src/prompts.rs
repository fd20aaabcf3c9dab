//! Prompts for the optional normalisation stage.
//!
//! Callers can override the system prompt via
//! [`crate::normalize::NormalizerConfig::system_prompt`]; the constant here is
//! used only when no override is provided.

/// Default system prompt asking the model to tidy an extracted recipe.
pub const DEFAULT_NORMALIZE_PROMPT: &str = r#"You clean up recipe text scraped from web pages.

You receive the raw text extracted from a recipe page. It may contain
navigation, advertisements, comments, duplicated passages or placeholder
lines such as "Ingredients not found".

Return ONLY the recipe, in this exact layout:

Title: <recipe title>

Ingredients:
- <one ingredient per line>

Instructions:
1. <one step per line>

Rules:
- Keep the original language of the recipe.
- Keep quantities and units exactly as written.
- Do not invent ingredients or steps that are not in the text.
- No commentary, no introduction, no closing remarks."#;

/// Build the user message carrying the raw recipe text.
#[must_use]
pub fn normalize_request(raw_text: &str) -> String {
    format!("Here is the scraped recipe text:\n\n{raw_text}")
}
