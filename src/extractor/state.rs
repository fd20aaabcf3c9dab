//! Extraction state carried between passes.
//!
//! A field, once set, is never overwritten: earlier passes have higher
//! precision than later ones.

use crate::result::{
    ExtractionResult, FULL_TEXT_NOT_FOUND, INGREDIENTS_NOT_FOUND, INSTRUCTIONS_NOT_FOUND,
    TITLE_NOT_FOUND,
};

/// Separator between ingredient entries.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Separator between instruction steps.
pub const INSTRUCTION_SEPARATOR: &str = "\n";

/// One of the four extracted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Ingredients,
    Instructions,
    FullText,
}

impl Field {
    /// All fields in result order.
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Ingredients,
        Field::Instructions,
        Field::FullText,
    ];

    /// Sentinel substituted when the field stays empty.
    #[must_use]
    pub fn sentinel(self) -> &'static str {
        match self {
            Field::Title => TITLE_NOT_FOUND,
            Field::Ingredients => INGREDIENTS_NOT_FOUND,
            Field::Instructions => INSTRUCTIONS_NOT_FOUND,
            Field::FullText => FULL_TEXT_NOT_FOUND,
        }
    }

    /// Separator used when a field is built from several elements.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Field::Instructions => INSTRUCTION_SEPARATOR,
            Field::Title | Field::Ingredients | Field::FullText => INGREDIENT_SEPARATOR,
        }
    }
}

/// Fields found so far, or the fields a pass proposes to add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecipe {
    title: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
    full_text: Option<String>,
}

impl PartialRecipe {
    /// A recipe with a single field set.
    #[must_use]
    pub fn with(field: Field, value: impl Into<String>) -> Self {
        let mut recipe = Self::default();
        recipe.set(field, Some(value.into()));
        recipe
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Title => &self.title,
            Field::Ingredients => &self.ingredients,
            Field::Instructions => &self.instructions,
            Field::FullText => &self.full_text,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Ingredients => &mut self.ingredients,
            Field::Instructions => &mut self.instructions,
            Field::FullText => &mut self.full_text,
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Whether the field still needs a value.
    #[must_use]
    pub fn is_missing(&self, field: Field) -> bool {
        self.slot(field).is_none()
    }

    /// Set a field if it is empty and `value` has non-whitespace content.
    ///
    /// Returns true when the value was stored.
    pub fn set(&mut self, field: Field, value: Option<String>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let trimmed = value.trim();
        let slot = self.slot_mut(field);
        if slot.is_some() || trimmed.is_empty() {
            return false;
        }
        *slot = Some(trimmed.to_string());
        true
    }

    /// Copy every field of `update` that is still missing here.
    pub fn merge(&mut self, update: PartialRecipe) {
        let PartialRecipe { title, ingredients, instructions, full_text } = update;
        self.set(Field::Title, title);
        self.set(Field::Ingredients, ingredients);
        self.set(Field::Instructions, instructions);
        self.set(Field::FullText, full_text);
    }

    /// Fields that hold a value.
    #[must_use]
    pub fn found_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| !self.is_missing(*f)).collect()
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.is_missing(*f))
    }

    /// True when every field is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.is_missing(*f))
    }

    /// Convert to a result, substituting sentinels for missing fields.
    #[must_use]
    pub fn into_result(self) -> ExtractionResult {
        let or_sentinel = |value: Option<String>, field: Field| {
            value.unwrap_or_else(|| field.sentinel().to_string())
        };
        ExtractionResult {
            title: or_sentinel(self.title, Field::Title),
            ingredients: or_sentinel(self.ingredients, Field::Ingredients),
            instructions: or_sentinel(self.instructions, Field::Instructions),
            full_text: or_sentinel(self.full_text, Field::FullText),
        }
    }

    /// Turn into an update for a pass: `None` when nothing was found.
    #[must_use]
    pub fn into_update(self) -> Option<PartialRecipe> {
        (!self.is_empty()).then_some(self)
    }
}
