//! Configuration options for recipe extraction.
//!
//! The `Options` struct holds every list the extraction cascade walks. The
//! defaults are layered from generic to specific so that something is found
//! on pages with unknown markup; callers targeting a known site can prepend
//! their own selectors.

/// Configuration options for recipe extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the built-in cascade.
///
/// # Example
///
/// ```rust
/// use recipe_scraper::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Try a site-specific ingredient list first
/// let mut ingredient_selectors = vec!["ul.zutaten li".to_string()];
/// ingredient_selectors.extend(options.ingredient_selectors.clone());
/// let options = Options {
///     ingredient_selectors,
///     body_fallback: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Containers whose text becomes `fullText`, tried in order.
    ///
    /// Default: `article`, `div.recipe-text`, `div#recipe`,
    /// `div.entry-content`, `section.recipe`, `div.recipe-container`
    pub container_selectors: Vec<String>,

    /// Selectors for individual ingredient entries, tried in order.
    ///
    /// The first selector matching at least one non-empty element wins and
    /// all of its matches are joined with `", "`.
    pub ingredient_selectors: Vec<String>,

    /// Selectors for individual instruction steps, tried in order.
    ///
    /// The first selector matching at least one non-empty element wins and
    /// all of its matches are joined with newlines.
    pub instruction_selectors: Vec<String>,

    /// Heading tags searched by the heading-proximity pass.
    ///
    /// Default: `h2`, `h3`
    pub heading_tags: Vec<String>,

    /// Heading labels announcing the ingredient list (case-insensitive).
    ///
    /// Default: `Ingredients`, `Hozzávalók`
    pub ingredient_labels: Vec<String>,

    /// Heading labels announcing the instructions (case-insensitive).
    pub instruction_labels: Vec<String>,

    /// Containers tried by the whole-page fallback when no
    /// `container_selectors` entry matched.
    pub fallback_containers: Vec<String>,

    /// Use the whole `<body>` text as the last resort for `fullText`.
    ///
    /// Default: `true`
    pub body_fallback: bool,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container_selectors: owned(&[
                "article",
                "div.recipe-text",
                "div#recipe",
                "div.entry-content",
                "section.recipe",
                "div.recipe-container",
            ]),
            ingredient_selectors: owned(&[
                r#"[itemprop="recipeIngredient"]"#,
                r#"[itemprop="ingredients"]"#,
                ".wprm-recipe-ingredient",
                ".tasty-recipes-ingredients li",
                ".mv-create-ingredients li",
                ".recipe-ingredients li",
                "ul.ingredients li",
                ".ingredients li",
                ".ingredient",
            ]),
            instruction_selectors: owned(&[
                r#"[itemprop="recipeInstructions"] li"#,
                r#"[itemprop="recipeInstructions"]"#,
                ".wprm-recipe-instruction-text",
                ".tasty-recipes-instructions li",
                ".mv-create-instructions li",
                ".recipe-instructions li",
                ".recipe-directions li",
                ".instructions li",
                ".directions li",
                ".preparation li",
                ".method li",
                ".instruction",
            ]),
            heading_tags: owned(&["h2", "h3"]),
            ingredient_labels: owned(&["Ingredients", "Hozzávalók"]),
            instruction_labels: owned(&[
                "Instructions",
                "Directions",
                "Preparation",
                "Method",
                "Utmutató",
                "Elkészítés",
                "Módszer",
                "Elkészítési lépések",
            ]),
            fallback_containers: owned(&[
                "main",
                r#"[role="main"]"#,
                "div.post-content",
                "div#content",
            ]),
            body_fallback: true,
        }
    }
}

impl Options {
    /// CSS selector list matching every configured heading tag.
    #[must_use]
    pub fn heading_selector(&self) -> String {
        self.heading_tags.join(", ")
    }
}
