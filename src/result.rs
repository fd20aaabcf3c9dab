//! Result types for extraction output.
//!
//! Every field of [`ExtractionResult`] is always populated, either with
//! extracted text or with its sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title used when no candidate was found.
pub const TITLE_NOT_FOUND: &str = "Unknown Recipe Title";

/// Ingredients used when no candidate was found.
pub const INGREDIENTS_NOT_FOUND: &str = "Ingredients not found";

/// Instructions used when no candidate was found.
pub const INSTRUCTIONS_NOT_FOUND: &str = "Instructions not found";

/// Full text used when no candidate was found.
pub const FULL_TEXT_NOT_FOUND: &str = "Recipe text not found";

/// Result of recipe extraction from an HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Recipe title.
    pub title: String,

    /// Ingredient entries joined with `", "`.
    pub ingredients: String,

    /// Instruction steps joined with newlines.
    pub instructions: String,

    /// Whitespace-collapsed text of the recipe container or page.
    pub full_text: String,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            title: TITLE_NOT_FOUND.to_string(),
            ingredients: INGREDIENTS_NOT_FOUND.to_string(),
            instructions: INSTRUCTIONS_NOT_FOUND.to_string(),
            full_text: FULL_TEXT_NOT_FOUND.to_string(),
        }
    }
}

impl ExtractionResult {
    /// Whether a real title was found.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title != TITLE_NOT_FOUND
    }

    /// Whether real ingredients were found.
    #[must_use]
    pub fn has_ingredients(&self) -> bool {
        self.ingredients != INGREDIENTS_NOT_FOUND
    }

    /// Whether real instructions were found.
    #[must_use]
    pub fn has_instructions(&self) -> bool {
        self.instructions != INSTRUCTIONS_NOT_FOUND
    }

    /// Whether real page text was found.
    #[must_use]
    pub fn has_full_text(&self) -> bool {
        self.full_text != FULL_TEXT_NOT_FOUND
    }

    /// True when every field holds its sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.has_title() || self.has_ingredients() || self.has_instructions() || self.has_full_text())
    }

    /// Render as the multi-line text blob stored in a recipe's `body`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_scraper::ExtractionResult;
    ///
    /// let body = ExtractionResult::default().to_body();
    /// assert!(body.starts_with("Title: Unknown Recipe Title\n"));
    /// ```
    #[must_use]
    pub fn to_body(&self) -> String {
        format!(
            "Title: {}\n\nIngredients:\n{}\n\nInstructions:\n{}\n\nFull text:\n{}",
            self.title, self.ingredients, self.instructions, self.full_text
        )
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_body())
    }
}
