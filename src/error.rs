//! Error types for the letter_pdf crate.

use thiserror::Error;

/// Errors raised while producing a letter.
#[derive(Error, Debug)]
pub enum LetterError {
    /// No usable font family could be loaded for the renderer.
    #[error("Failed to load fonts: {0}")]
    FontLoad(#[source] genpdf::error::Error),

    /// The document could not be laid out or serialized.
    #[error("Failed to render letter: {0}")]
    Render(#[source] genpdf::error::Error),

    /// A configuration value could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for letter operations.
pub type Result<T> = std::result::Result<T, LetterError>;
