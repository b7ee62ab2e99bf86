//! Graphics backend interfaces: images the layout engine can measure and a
//! canvas the render pass draws onto.

use crate::font::FontFace;
use inkline_types::{Color, Rect, Size};
use std::fmt::Debug;
use std::sync::Arc;

/// Shared image handle. The registry keeps a clone; the texture itself
/// belongs to the graphics backend.
pub type ImageHandle = Arc<dyn Image>;

/// A drawable image (texture) with a native size.
pub trait Image: Send + Sync + Debug {
    fn size(&self) -> Size;
}

/// A drawing surface.
///
/// Calls arrive in fragment order during one render pass; coordinates are
/// already translated into surface space.
pub trait Canvas {
    fn draw_text(&mut self, font: &dyn FontFace, text: &str, color: Color, x: f32, y: f32);

    fn draw_image(&mut self, image: &dyn Image, dest: Rect);
}
