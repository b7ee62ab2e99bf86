//! TrueType/OpenType font backend.
//!
//! `TrueTypeFont` implements `FontFace` over raw font data using rustybuzz
//! for shaping and ttf-parser for metrics. Copies at other sizes share the
//! same font data.
//!
//! With the `system-fonts` feature, `SystemFontLibrary` finds installed
//! families through fontdb.

use inkline_traits::{FontError, FontFace, FontHandle, TextMetrics};
use rustybuzz::UnicodeBuffer;
use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

// Reuse buffer to avoid allocations when measuring many runs
thread_local! {
    static SCRATCH_BUFFER: RefCell<Option<UnicodeBuffer>> =
        RefCell::new(Some(UnicodeBuffer::new()));
}

/// Design-unit vertical metrics, read once when the font is parsed.
#[derive(Debug, Clone, Copy)]
struct VerticalMetrics {
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    line_gap: f32,
}

pub struct TrueTypeFont {
    data: Arc<Vec<u8>>,
    index: u32,
    size: u32,
    family: Option<String>,
    metrics: VerticalMetrics,
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("family", &self.family)
            .field("size", &self.size)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl TrueTypeFont {
    /// Parses face `index` of `data` at `size` points.
    pub fn from_bytes(data: Vec<u8>, index: u32, size: u32) -> Result<Self, FontError> {
        Self::from_shared(Arc::new(data), index, size)
    }

    pub fn from_shared(data: Arc<Vec<u8>>, index: u32, size: u32) -> Result<Self, FontError> {
        let face = rustybuzz::Face::from_slice(&data, index)
            .ok_or_else(|| FontError::InvalidData(format!("no usable face at index {}", index)))?;

        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string());

        let metrics = VerticalMetrics {
            units_per_em: face.units_per_em() as f32,
            ascender: face.ascender() as f32,
            descender: face.descender() as f32,
            line_gap: face.line_gap() as f32,
        };
        drop(face);

        Ok(Self {
            data,
            index,
            size,
            family,
            metrics,
        })
    }

    /// Reads a font file from disk.
    pub fn open<P: AsRef<Path>>(path: P, size: u32) -> Result<Self, FontError> {
        let data = std::fs::read(path.as_ref())?;
        log::debug!("Loaded {} bytes of font data from {}", data.len(), path.as_ref().display());
        Self::from_bytes(data, 0, size)
    }

    pub fn into_handle(self) -> FontHandle {
        Arc::new(self)
    }

    fn scale(&self) -> f32 {
        self.size as f32 / self.metrics.units_per_em
    }

    /// Creates a lightweight Face view over the font data.
    fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

impl FontFace for TrueTypeFont {
    fn family_name(&self) -> Option<String> {
        self.family.clone()
    }

    fn point_size(&self) -> u32 {
        self.size
    }

    fn copy_at_size(&self, point_size: u32) -> Result<FontHandle, FontError> {
        Ok(Arc::new(Self {
            data: self.data.clone(),
            index: self.index,
            size: point_size,
            family: self.family.clone(),
            metrics: self.metrics,
        }))
    }

    fn line_height(&self) -> i32 {
        let m = &self.metrics;
        ((m.ascender - m.descender + m.line_gap) * self.scale()).ceil() as i32
    }

    fn measure(&self, text: &str) -> Result<TextMetrics, FontError> {
        let face = self
            .as_face()
            .ok_or_else(|| FontError::MeasureFailed("font data no longer parses".to_string()))?;

        let mut buffer =
            SCRATCH_BUFFER.with(|b| b.borrow_mut().take().unwrap_or_else(UnicodeBuffer::new));
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&face, &[], buffer);
        let advance: i32 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();

        let recycled_buffer = glyph_buffer.clear();
        SCRATCH_BUFFER.with(|b| *b.borrow_mut() = Some(recycled_buffer));

        let width = (advance as f32 * self.scale()).ceil() as i32;
        Ok(TextMetrics::new(width, self.line_height()))
    }
}

/// Installed fonts, discovered once and queried by family name.
#[cfg(feature = "system-fonts")]
pub struct SystemFontLibrary {
    db: fontdb::Database,
}

#[cfg(feature = "system-fonts")]
impl SystemFontLibrary {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Discovered {} system font faces", db.len());
        Self { db }
    }

    /// An empty library, filled through `load_font_data`.
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Loads the regular face of `family` at `size` points.
    pub fn load(&self, family: &str, size: u32) -> Result<TrueTypeFont, FontError> {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            ..fontdb::Query::default()
        };
        let id = self
            .db
            .query(&query)
            .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))?;

        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))?;

        TrueTypeFont::from_bytes(data, index, size)
    }
}

#[cfg(feature = "system-fonts")]
impl Default for SystemFontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_is_rejected() {
        let err = TrueTypeFont::from_bytes(b"definitely not a font".to_vec(), 0, 12).unwrap_err();
        assert!(matches!(err, FontError::InvalidData(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TrueTypeFont::open("/nonexistent/inkline/font.ttf", 12).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }

    #[cfg(feature = "system-fonts")]
    #[test]
    fn test_unknown_family_in_empty_library() {
        let library = SystemFontLibrary::empty();
        assert!(library.is_empty());
        let err = library.load("No Such Family", 12).unwrap_err();
        assert_eq!(err, FontError::FamilyNotFound("No Such Family".to_string()));
    }
}
