//! Font loading for the letter renderer.
//!
//! The DejaVu Sans family is compiled into the binary, so rendering never touches the
//! filesystem. Setting `LETTER_PDF_FONTS_DIR` swaps in another family loaded from disk; the
//! directory must hold `{family}-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf` and `-BoldItalic.ttf`,
//! where the family name comes from `LETTER_PDF_FONT_FAMILY`.

use std::env;
use std::io;
use std::path::PathBuf;

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::info;

/// Name of the embedded font family.
pub const EMBEDDED_FONT_FAMILY_NAME: &str = "DejaVuSans";

/// Directory holding an override font family.
pub const FONTS_DIR_ENV: &str = "LETTER_PDF_FONTS_DIR";

/// File name prefix of the override font family.
pub const FONT_FAMILY_ENV: &str = "LETTER_PDF_FONT_FAMILY";

/// Regular style of the embedded family; body text is set in it.
pub const EMBEDDED_REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const EMBEDDED_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
const EMBEDDED_ITALIC: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Oblique.ttf");
const EMBEDDED_BOLD_ITALIC: &[u8] =
    include_bytes!("../../assets/fonts/DejaVuSans-BoldOblique.ttf");

/// Where the renderer takes its font family from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// The family compiled into the binary.
    Embedded,
    /// A family loaded from `directory` with genpdf's `{family}-{Style}.ttf` naming.
    Directory { directory: PathBuf, family: String },
}

impl FontSource {
    /// Reads the source from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Chooses a directory source when a non-blank directory is configured.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        match value(FONTS_DIR_ENV) {
            Some(directory) => Self::Directory {
                directory: PathBuf::from(directory),
                family: value(FONT_FAMILY_ENV)
                    .unwrap_or_else(|| EMBEDDED_FONT_FAMILY_NAME.to_owned()),
            },
            None => Self::Embedded,
        }
    }

    /// Loads the family. Directory sources fail instead of silently using the embedded fonts.
    pub fn load(&self) -> Result<FontFamily<FontData>, Error> {
        match self {
            Self::Embedded => embedded_font_family(),
            Self::Directory { directory, family } => {
                info!("Loading font family '{}' from {}", family, directory.display());
                fonts::from_files(directory, family, None).map_err(|err| {
                    Error::new(
                        format!(
                            "Failed to load font family '{}' from {}: {}",
                            family,
                            directory.display(),
                            err
                        ),
                        io::Error::new(io::ErrorKind::NotFound, err.to_string()),
                    )
                })
            }
        }
    }
}

fn embedded_font(bytes: &[u8], style: &str) -> Result<FontData, Error> {
    FontData::new(bytes.to_vec(), None).map_err(|err| {
        Error::new(
            format!(
                "Embedded {} {} font is unreadable: {}",
                EMBEDDED_FONT_FAMILY_NAME, style, err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}

/// Returns the font family compiled into the binary.
pub fn embedded_font_family() -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: embedded_font(EMBEDDED_REGULAR, "regular")?,
        bold: embedded_font(EMBEDDED_BOLD, "bold")?,
        italic: embedded_font(EMBEDDED_ITALIC, "italic")?,
        bold_italic: embedded_font(EMBEDDED_BOLD_ITALIC, "bold italic")?,
    })
}

/// Loads the family selected by the environment.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    FontSource::from_env().load()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn embedded_family_loads_without_files() {
        assert!(embedded_font_family().is_ok());
    }

    #[test]
    fn embedded_is_the_default_source() {
        assert_eq!(FontSource::from_lookup(lookup(&[])), FontSource::Embedded);
        assert_eq!(
            FontSource::from_lookup(lookup(&[(FONTS_DIR_ENV, "  ")])),
            FontSource::Embedded
        );
    }

    #[test]
    fn directory_override_names_the_family() {
        let source = FontSource::from_lookup(lookup(&[
            (FONTS_DIR_ENV, "/opt/fonts"),
            (FONT_FAMILY_ENV, "Roboto"),
        ]));
        assert_eq!(
            source,
            FontSource::Directory {
                directory: PathBuf::from("/opt/fonts"),
                family: "Roboto".to_owned(),
            }
        );
    }

    #[test]
    fn missing_override_directory_fails_loudly() {
        let source = FontSource::Directory {
            directory: PathBuf::from("/__letter_pdf_missing_fonts__"),
            family: "Roboto".to_owned(),
        };
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("/__letter_pdf_missing_fonts__"));
    }
}
