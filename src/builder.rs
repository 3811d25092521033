//! Document construction and rendering for letters.

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::{self, Margins, Mm, PaperSize, Size, SimplePageDecorator};
use log::debug;

use crate::error::{LetterError, Result};
use crate::fonts;
use crate::layout::LetterLine;

/// Leading bytes of every PDF file.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

const DEFAULT_MARGIN_MM: f64 = 20.0;
const DEFAULT_FONT_SIZE: u8 = 11;
const DEFAULT_LINE_SPACING: f64 = 1.25;
const DEFAULT_TITLE: &str = "Letter";

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// A finished PDF held in memory.
///
/// The bytes are only exposed after the renderer has written the complete document, so the
/// length is final and the content never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Wraps already rendered bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns whether the bytes start with the PDF header.
    pub fn has_pdf_signature(&self) -> bool {
        self.bytes.starts_with(PDF_SIGNATURE)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builder for letter documents pre-configured with the crate defaults (A4, 20 mm margins,
/// 11 pt text).
///
/// The font family is loaded once and cloned into every document, so a builder is created at
/// start-up and shared by all renders.
pub struct LetterDocumentBuilder {
    font_family: FontFamily<FontData>,
    paper_size: Size,
    margins: Margins,
}

impl LetterDocumentBuilder {
    /// Creates a builder rendering with `font_family`.
    pub fn new(font_family: FontFamily<FontData>) -> Self {
        Self {
            font_family,
            paper_size: PaperSize::A4.into(),
            margins: mm_from_f64(DEFAULT_MARGIN_MM).into(),
        }
    }

    /// Creates a builder with the family selected by the environment, which is the embedded
    /// family unless an override directory is configured.
    pub fn from_env() -> Result<Self> {
        let font_family = fonts::default_font_family().map_err(LetterError::FontLoad)?;
        Ok(Self::new(font_family))
    }

    /// Creates an empty `genpdf::Document` with fonts, paper size and margins applied.
    pub fn build(&self) -> genpdf::Document {
        let mut document = genpdf::Document::new(self.font_family.clone());

        document.set_title(DEFAULT_TITLE);
        document.set_paper_size(self.paper_size);
        document.set_font_size(DEFAULT_FONT_SIZE);
        document.set_line_spacing(DEFAULT_LINE_SPACING);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins);
        document.set_page_decorator(decorator);

        document
    }

    /// Lays out `lines` and renders the finished document into memory.
    pub fn render(&self, lines: &[LetterLine]) -> Result<RenderedDocument> {
        let mut document = self.build();

        for line in lines {
            match line {
                LetterLine::Text {
                    text, alignment, ..
                } => document.push(Paragraph::new(text.as_str()).aligned((*alignment).into())),
                LetterLine::Blank => document.push(Break::new(1)),
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(LetterError::Render)?;
        debug!("Rendered {} layout lines into {} bytes", lines.len(), bytes.len());

        Ok(RenderedDocument::from_bytes(bytes))
    }
}
