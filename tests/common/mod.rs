pub mod fixtures;

use inkline::{Canvas, Color, FontError, FontFace, FontHandle, Image, Rect, Size, TextMetrics};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Fixed-advance font: `advance` pixels per char at 10pt, scaled linearly,
/// and a line height of `line_factor` times the point size.
#[derive(Debug, Clone)]
pub struct FakeFont {
    pub family: Option<String>,
    pub size: u32,
    pub advance_per_10pt: u32,
    pub line_factor: u32,
}

impl FakeFont {
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: Some(family.to_string()),
            size,
            advance_per_10pt: 5,
            line_factor: 2,
        }
    }

    pub fn handle(family: &str, size: u32) -> FontHandle {
        Arc::new(Self::new(family, size))
    }

    pub fn advance(&self) -> i32 {
        (self.advance_per_10pt * self.size / 10) as i32
    }
}

impl FontFace for FakeFont {
    fn family_name(&self) -> Option<String> {
        self.family.clone()
    }

    fn point_size(&self) -> u32 {
        self.size
    }

    fn copy_at_size(&self, point_size: u32) -> Result<FontHandle, FontError> {
        Ok(Arc::new(Self {
            size: point_size,
            ..self.clone()
        }))
    }

    fn line_height(&self) -> i32 {
        (self.size * self.line_factor) as i32
    }

    fn measure(&self, text: &str) -> Result<TextMetrics, FontError> {
        Ok(TextMetrics::new(
            text.chars().count() as i32 * self.advance(),
            self.line_height(),
        ))
    }
}

#[derive(Debug)]
pub struct FakeTexture(pub Size);

impl Image for FakeTexture {
    fn size(&self) -> Size {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Text(String, Color, f32, f32),
    Image(Rect),
}

/// Canvas that records every call of a render pass.
#[derive(Debug, Default)]
pub struct LogCanvas {
    pub draws: Vec<Draw>,
}

impl Canvas for LogCanvas {
    fn draw_text(&mut self, _font: &dyn FontFace, text: &str, color: Color, x: f32, y: f32) {
        self.draws.push(Draw::Text(text.to_string(), color, x, y));
    }

    fn draw_image(&mut self, _image: &dyn Image, dest: Rect) {
        self.draws.push(Draw::Image(dest));
    }
}
