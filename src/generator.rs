//! The letter generator: invocation event in, PDF response out.

use chrono::{NaiveDate, Utc};
use log::info;
use serde_json::Value;

use crate::builder::{LetterDocumentBuilder, RenderedDocument};
use crate::config::LetterConfig;
use crate::content::{FakeDataSource, LetterContent, LetterDataSource};
use crate::error::Result;
use crate::layout;
use crate::response::LetterResponse;

/// Produces letters from a data source according to a configuration.
///
/// A generator is meant to live for a single invocation; the data source is owned so no state is
/// shared between concurrent invocations. The configuration and the document builder (with its
/// loaded fonts) are borrowed from start-up.
pub struct LetterGenerator<'a, S = FakeDataSource> {
    config: &'a LetterConfig,
    document: &'a LetterDocumentBuilder,
    source: S,
    today: Option<NaiveDate>,
}

impl<'a> LetterGenerator<'a, FakeDataSource> {
    /// Creates a generator drawing from a freshly seeded fake data source.
    pub fn new(config: &'a LetterConfig, document: &'a LetterDocumentBuilder) -> Self {
        Self::with_source(config, document, FakeDataSource::from_entropy())
    }
}

impl<'a, S: LetterDataSource> LetterGenerator<'a, S> {
    /// Creates a generator drawing from `source`.
    pub fn with_source(
        config: &'a LetterConfig,
        document: &'a LetterDocumentBuilder,
        source: S,
    ) -> Self {
        Self {
            config,
            document,
            source,
            today: None,
        }
    }

    /// Pins the reference date used for past dates instead of the current UTC date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Draws new content and renders it.
    pub fn render(&mut self) -> Result<(LetterContent, RenderedDocument)> {
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        let content = LetterContent::generate(&mut self.source, self.config.variant, today);
        let document = self.document.render(&layout::plan(&content))?;
        Ok((content, document))
    }

    /// Handles one invocation. The event is accepted whatever its shape and never inspected.
    pub fn generate(&mut self, _event: &Value) -> Result<LetterResponse> {
        let (_, document) = self.render()?;
        info!(
            "Generated {} letter ({} bytes) as {}",
            self.config.variant,
            document.len(),
            self.config.filename
        );

        Ok(LetterResponse::pdf_attachment(
            &document,
            &self.config.filename,
            self.config.content_length,
        ))
    }
}
