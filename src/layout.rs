//! Line-level layout of a letter.
//!
//! The plan is independent of the rendering crate: it lists, in order, every line that ends up
//! in the document together with its alignment. [`crate::builder`] maps each line onto a
//! `genpdf` element.

use crate::content::LetterContent;

/// Horizontal placement of a line.
///
/// Maps directly onto [`genpdf::Alignment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<HorizontalAlignment> for genpdf::Alignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => genpdf::Alignment::Left,
            HorizontalAlignment::Center => genpdf::Alignment::Center,
            HorizontalAlignment::Right => genpdf::Alignment::Right,
        }
    }
}

/// What a line of the plan represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Sender,
    Opening,
    Body,
    Signature,
}

/// A single entry of the layout plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LetterLine {
    /// Wrapped text with an alignment.
    Text {
        text: String,
        alignment: HorizontalAlignment,
        role: LineRole,
    },
    /// An empty line.
    Blank,
}

impl LetterLine {
    fn text(text: impl Into<String>, alignment: HorizontalAlignment, role: LineRole) -> Self {
        Self::Text {
            text: text.into(),
            alignment,
            role,
        }
    }

    /// Returns the text of the line, or `None` for blank lines.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Blank => None,
        }
    }

    /// Returns the role of the line, or `None` for blank lines.
    pub fn role(&self) -> Option<LineRole> {
        match self {
            Self::Text { role, .. } => Some(*role),
            Self::Blank => None,
        }
    }
}

/// Lays out `content`: the sender block right-aligned, a blank line, the opening line, a blank
/// line, every body paragraph followed by a blank line, and the signature right-aligned.
pub fn plan(content: &LetterContent) -> Vec<LetterLine> {
    let mut lines = Vec::with_capacity(content.address.len() + content.paragraphs.len() * 2 + 6);

    lines.push(LetterLine::text(
        &content.name,
        HorizontalAlignment::Right,
        LineRole::Sender,
    ));
    lines.extend(
        content
            .address
            .iter()
            .map(|line| LetterLine::text(line, HorizontalAlignment::Right, LineRole::Sender)),
    );
    lines.push(LetterLine::Blank);

    lines.push(LetterLine::text(
        &content.opening,
        HorizontalAlignment::Left,
        LineRole::Opening,
    ));
    lines.push(LetterLine::Blank);

    for paragraph in &content.paragraphs {
        lines.push(LetterLine::text(
            paragraph,
            HorizontalAlignment::Left,
            LineRole::Body,
        ));
        lines.push(LetterLine::Blank);
    }

    lines.push(LetterLine::text(
        &content.signature,
        HorizontalAlignment::Right,
        LineRole::Signature,
    ));

    lines
}
