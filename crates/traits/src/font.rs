//! FontFace trait for abstracting the text-shaping engine.
//!
//! The layout engine never touches glyphs directly. It asks a font for its
//! line height, asks it to measure runs of text, and asks it for copies of
//! itself at other point sizes.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for font engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Failed to parse font data: {0}")]
    InvalidData(String),

    #[error("Failed to copy font at {0}pt")]
    CopyFailed(u32),

    #[error("Failed to measure text: {0}")]
    MeasureFailed(String),

    #[error("Font family '{0}' not found")]
    FamilyNotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err.to_string())
    }
}

/// Shared font handle. Registries and caches hold clones; nothing in this
/// workspace ever closes the underlying font.
pub type FontHandle = Arc<dyn FontFace>;

/// The integer extent of a measured run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
}

impl TextMetrics {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A font at one specific point size.
///
/// # Implementations
///
/// - `TrueTypeFont` in `inkline-layout`: rustybuzz shaping over TTF/OTF data
/// - `MonospaceFont` in `inkline-layout::test_utils`: fixed advances for tests
pub trait FontFace: Send + Sync + Debug {
    /// The family name from the font's metadata, if it has one.
    fn family_name(&self) -> Option<String>;

    /// The point size this face is set to.
    fn point_size(&self) -> u32;

    /// Duplicate this font and set the duplicate to `point_size`.
    fn copy_at_size(&self, point_size: u32) -> Result<FontHandle, FontError>;

    /// Recommended distance between consecutive baselines, in pixels.
    fn line_height(&self) -> i32;

    /// Measure `text` laid out as one unbroken run.
    fn measure(&self, text: &str) -> Result<TextMetrics, FontError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_error_display() {
        let err = FontError::CopyFailed(36);
        assert!(err.to_string().contains("36pt"));

        let err = FontError::FamilyNotFound("Roboto".to_string());
        assert!(err.to_string().contains("Roboto"));
    }

    #[test]
    fn test_font_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "font.ttf missing");
        let err: FontError = io_err.into();
        assert!(matches!(err, FontError::Io(_)));
        assert!(err.to_string().contains("font.ttf missing"));
    }
}
