use inkline_resource::Context;
use inkline_traits::{Canvas, FontError, FontFace, FontHandle, Image, TextMetrics};
use inkline_types::{Color, Rect, Size};
use std::sync::Arc;

/// A font where every character is half the point size wide and a line is
/// exactly the point size tall.
#[derive(Debug, Clone)]
pub struct MonospaceFont {
    pub family: String,
    pub size: u32,
    pub fail_measure: bool,
}

impl MonospaceFont {
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: family.to_string(),
            size,
            fail_measure: false,
        }
    }

    pub fn failing_measure() -> Self {
        Self {
            fail_measure: true,
            ..Self::new("Broken", 12)
        }
    }
}

impl FontFace for MonospaceFont {
    fn family_name(&self) -> Option<String> {
        Some(self.family.clone())
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
        self.size as i32
    }

    fn measure(&self, text: &str) -> Result<TextMetrics, FontError> {
        if self.fail_measure {
            return Err(FontError::MeasureFailed(text.to_string()));
        }
        let advance = (self.size / 2) as i32;
        Ok(TextMetrics::new(text.chars().count() as i32 * advance, self.size as i32))
    }
}

#[derive(Debug)]
pub struct FixedImage {
    size: Size,
}

impl FixedImage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Image for FixedImage {
    fn size(&self) -> Size {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedDraw {
    Text {
        text: String,
        color: Color,
        point_size: u32,
        x: f32,
        y: f32,
    },
    Image {
        dest: Rect,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub draws: Vec<RecordedDraw>,
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, font: &dyn FontFace, text: &str, color: Color, x: f32, y: f32) {
        self.draws.push(RecordedDraw::Text {
            text: text.to_string(),
            color,
            point_size: font.point_size(),
            x,
            y,
        });
    }

    fn draw_image(&mut self, _image: &dyn Image, dest: Rect) {
        self.draws.push(RecordedDraw::Image { dest });
    }
}

/// A context with two 12pt monospace families (`main`, the default, and
/// `serif`), the CSS palette, a few strings and sizes, and two images.
pub fn test_context() -> Context {
    let mut ctx = Context::new();
    ctx.register_font(Arc::new(MonospaceFont::new("Mono", 12)), Some("main"))
        .unwrap();
    ctx.register_font(Arc::new(MonospaceFont::new("Serif", 12)), Some("serif"))
        .unwrap();
    ctx.register_css_colors();
    ctx.register_string("greeting", "Hello").unwrap();
    ctx.register_size("big", 24).unwrap();
    ctx.register_size("huge", 1000).unwrap();
    ctx.register_image("icon", Arc::new(FixedImage::new(8.0, 8.0))).unwrap();
    ctx.register_image("banner", Arc::new(FixedImage::new(40.0, 20.0))).unwrap();
    ctx
}
