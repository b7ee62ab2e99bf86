pub mod font;
pub mod graphics;

pub use font::{FontError, FontFace, FontHandle, TextMetrics};
pub use graphics::{Canvas, Image, ImageHandle};
