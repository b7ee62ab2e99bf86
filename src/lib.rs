//! Inline-styled text layout.
//!
//! Markup such as `"{{font:main}}Hello {{image:icon}}{{color:red}}{{user}}"`
//! is parsed into a [`CommandList`], which a [`Renderer`] lays out against a
//! [`Context`] of registered fonts, colors, sizes, strings and images. The
//! result is a list of positioned fragments and a bounding box that a draw
//! loop replays every frame through [`Renderer::render`].
//!
//! ```ignore
//! let mut ctx = Context::new();
//! ctx.register_font(TrueTypeFont::open("Roboto.ttf", 24)?.into_handle(), Some("main"))?;
//! ctx.register_css_colors();
//!
//! let mut renderer = Renderer::new(&ctx);
//! let options = ParseOptions::default();
//! let bounds = inkline::layout_markup("Hello {{color:red}}world", &options, &mut renderer)?;
//! renderer.render(&mut canvas, 50.0, 50.0);
//! ```

pub mod error;

pub use error::InklineError;

pub use inkline_layout::{
    Fragment, FragmentKind, FragmentSnapshot, ImageFragment, LayoutError, Renderer, RendererConfig,
    RendererState, TextFragment, TrueTypeFont,
};
#[cfg(feature = "system-fonts")]
pub use inkline_layout::SystemFontLibrary;
pub use inkline_markup::{Command, CommandList, MarkupError, ParseOptions, parse_markup};
pub use inkline_resource::{
    CSS_COLORS, Context, ContextConfig, FontCache, Registry, RegistryEntry, RegistryError,
};
pub use inkline_traits::{Canvas, FontError, FontFace, FontHandle, Image, ImageHandle, TextMetrics};
pub use inkline_types::{Bounds, Color, Point, Rect, Size};

use serde::Serialize;

/// Parses `text` and lays it out with `renderer`, returning the bounds.
///
/// A parse failure leaves the renderer untouched.
pub fn layout_markup(
    text: &str,
    options: &ParseOptions,
    renderer: &mut Renderer<'_>,
) -> Result<Bounds, InklineError> {
    let list = parse_markup(text, options)?;
    Ok(renderer.execute(&list)?)
}

/// The result of one layout pass in plain data form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub bounds: Bounds,
    pub fragments: Vec<FragmentSnapshot>,
}

impl LayoutReport {
    pub fn capture(renderer: &Renderer<'_>) -> Self {
        Self {
            bounds: renderer.bounds(),
            fragments: renderer.fragments().iter().map(Fragment::snapshot).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, InklineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
