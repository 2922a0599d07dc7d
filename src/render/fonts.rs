//! Fixed-width font resolution
//!
//! Reports use a monospaced family throughout so columns line up visually.
//! The crate bundles DejaVu Sans Mono under `fonts/`; callers embedding the
//! SDK elsewhere point `FontSource` at their own font directory.

use super::RenderError;
use genpdf::fonts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the fixed-width font family used for all report text.
///
/// The directory must contain `<family>-Regular.ttf`, `<family>-Bold.ttf`,
/// `<family>-Italic.ttf`, and `<family>-BoldItalic.ttf`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSource {
    /// Directory holding the `.ttf` files
    #[serde(default = "default_font_dir")]
    pub dir: PathBuf,
    /// Font family file-name prefix
    #[serde(default = "default_font_family")]
    pub family: String,
}

fn default_font_dir() -> PathBuf {
    PathBuf::from("fonts")
}

fn default_font_family() -> String {
    "DejaVuSansMono".to_string()
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            dir: default_font_dir(),
            family: default_font_family(),
        }
    }
}

impl FontSource {
    /// Point at a custom font directory and family
    pub fn new(dir: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            family: family.into(),
        }
    }

    /// Load the font family for document construction
    pub(crate) fn load(&self) -> Result<fonts::FontFamily<fonts::FontData>, RenderError> {
        fonts::from_files(&self.dir, &self.family, None).map_err(RenderError::Font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source() {
        let source = FontSource::default();
        assert_eq!(source.dir, PathBuf::from("fonts"));
        assert_eq!(source.family, "DejaVuSansMono");
    }

    #[test]
    fn test_load_bundled_family() {
        // Integration-style check against the bundled fonts; test binaries
        // run from the crate root so the default relative dir resolves.
        let source = FontSource::default();
        assert!(source.load().is_ok());
    }

    #[test]
    fn test_load_missing_family_fails() {
        let source = FontSource::new("fonts", "NoSuchFamily");
        let err = source.load().unwrap_err();
        assert!(matches!(err, RenderError::Font(_)));
    }
}
