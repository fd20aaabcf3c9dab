//! Error types for recipe-scraper.
//!
//! Extraction itself never fails: missing content is reported through the
//! sentinel values on [`crate::ExtractionResult`]. Everything here belongs to
//! the stages around it (fetching, normalisation, persistence, input checks).

/// Error type for recipe operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source page could not be retrieved.
    #[error("Failed to fetch '{url}': {reason}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport or status detail.
        reason: String,
    },

    /// A request body or document could not be parsed.
    #[error("Parsing failed: {0}")]
    Parse(String),

    /// The text-generation call failed or returned nothing usable.
    #[error("Normalization failed: {0}")]
    Normalization(String),

    /// Required input was missing or invalid.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// No recipe exists with the given id.
    #[error("Recipe {0} not found")]
    NotFound(i64),

    /// The storage backend rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The per-request deadline elapsed before the pipeline finished.
    #[error("Request deadline of {secs}s exceeded")]
    Timeout {
        /// Deadline in seconds.
        secs: u64,
    },

    /// Configuration could not be applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code this error is reported with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Parse(_) => 400,
            Self::NotFound(_) => 404,
            Self::Fetch { .. }
            | Self::Normalization(_)
            | Self::Storage(_)
            | Self::Timeout { .. }
            | Self::Config(_) => 500,
        }
    }

    /// Whether the caller caused this error (4xx) rather than the pipeline.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, Error>;
