//! Core entry point for the letter_pdf crate.
//!
//! The crate turns an (ignored) invocation event into an HTTP-proxy shaped response carrying a
//! freshly rendered placeholder letter as a base64-encoded PDF. See [`generator::LetterGenerator`].

pub mod builder;
pub mod config;
pub mod content;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod layout;
pub mod response;

pub use builder::{LetterDocumentBuilder, RenderedDocument};
pub use config::{ContentLengthMode, LetterConfig, LetterVariant};
pub use error::LetterError;
pub use generator::LetterGenerator;
pub use response::LetterResponse;
