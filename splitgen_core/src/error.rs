//! Error types for the splitgen_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for splitgen_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A catalog is missing a required column or value
    #[error("Schema error in {catalog} catalog: {detail}")]
    Schema { catalog: String, detail: String },

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A constrained random draw had no candidates
    #[error("Empty selection: {0}")]
    EmptySelection(String),

    /// Unrecognized split type or flag value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The report could not be handed to its destination
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl Error {
    /// Whether this error was caused by the user's arguments rather than by the data
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
