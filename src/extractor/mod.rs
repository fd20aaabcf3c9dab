//! Recipe extraction cascade.
//!
//! # Module Structure
//!
//! - `state`: Per-field accumulator shared by the passes
//! - `json_ld`: Structured data (schema.org `Recipe`)
//! - `selectors`: Ordered CSS selector lists
//! - `headings`: Section text after a labelled heading
//! - `fallback`: Broad containers and whole-body text
//! - `title`: Heading-based title
//! - `pipeline`: Pass ordering and result assembly
//!
//! # Usage
//!
//! ```rust
//! use recipe_scraper::extractor::{pipeline, state::{Field, PartialRecipe}};
//! use recipe_scraper::{dom, Options};
//!
//! // Whole cascade
//! let result = pipeline::extract_recipe("<h1>Soup</h1>", &Options::default());
//! assert_eq!(result.title, "Soup");
//!
//! // Or a single pass
//! let doc = dom::parse("<h2>Ingredients</h2><p>water</p>");
//! let update = recipe_scraper::extractor::headings::pass(&doc, &Options::default(), &PartialRecipe::default());
//! assert_eq!(update.and_then(|u| u.get(Field::Ingredients).map(str::to_string)).as_deref(), Some("water"));
//! ```

pub mod fallback;
pub mod headings;
pub mod json_ld;
pub mod pipeline;
pub mod selectors;
pub mod state;
pub mod title;

pub use pipeline::{extract_recipe, Pass, PassFn};
pub use state::{Field, PartialRecipe};
