//! Environment driven configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{LetterError, Result};

/// Filename announced in the `Content-disposition` header.
pub const DEFAULT_FILENAME: &str = "test.pdf";

/// Selects the letter template variant.
pub const VARIANT_ENV: &str = "LETTER_VARIANT";
/// Overrides the attachment filename.
pub const FILENAME_ENV: &str = "LETTER_FILENAME";
/// Selects how `Content-Length` is computed.
pub const CONTENT_LENGTH_ENV: &str = "LETTER_CONTENT_LENGTH";

/// Which line follows the sender block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetterVariant {
    /// `Dear {name},`
    #[default]
    Greeting,
    /// A date in the past, formatted as a locale date string.
    Dated,
}

impl FromStr for LetterVariant {
    type Err = LetterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "greeting" | "salutation" => Ok(Self::Greeting),
            "dated" | "date" => Ok(Self::Dated),
            other => Err(LetterError::Config(format!(
                "unknown letter variant '{}', expected 'greeting' or 'dated'",
                other
            ))),
        }
    }
}

impl fmt::Display for LetterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting => f.write_str("greeting"),
            Self::Dated => f.write_str("dated"),
        }
    }
}

/// How the `Content-Length` header value is derived.
///
/// `Decoded` reports the size of the PDF itself. `EncodedBody` reports the length of the base64
/// body string, which is what some deployments of this function historically returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentLengthMode {
    #[default]
    Decoded,
    EncodedBody,
}

impl FromStr for ContentLengthMode {
    type Err = LetterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "decoded" | "binary" => Ok(Self::Decoded),
            "encoded" | "encoded-body" | "base64" => Ok(Self::EncodedBody),
            other => Err(LetterError::Config(format!(
                "unknown content length mode '{}', expected 'decoded' or 'encoded-body'",
                other
            ))),
        }
    }
}

/// Settings shared read-only by every invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterConfig {
    pub variant: LetterVariant,
    pub filename: String,
    pub content_length: ContentLengthMode,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            variant: LetterVariant::default(),
            filename: DEFAULT_FILENAME.to_owned(),
            content_length: ContentLengthMode::default(),
        }
    }
}

impl LetterConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset or blank values keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(variant) = value(VARIANT_ENV) {
            config.variant = variant.parse()?;
        }
        if let Some(filename) = value(FILENAME_ENV) {
            config.filename = filename.trim().to_owned();
        }
        if let Some(mode) = value(CONTENT_LENGTH_ENV) {
            config.content_length = mode.parse()?;
        }

        Ok(config)
    }

    /// Sets the variant and returns the updated configuration.
    pub fn with_variant(mut self, variant: LetterVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the content length mode and returns the updated configuration.
    pub fn with_content_length(mut self, mode: ContentLengthMode) -> Self {
        self.content_length = mode;
        self
    }
}
