use inkline_resource::RegistryError;
use inkline_traits::FontError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Fragment pool exhausted: all {0} slots are in use.")]
    FragmentPoolExhausted(usize),
    #[error("No default font: register a font before laying out text.")]
    NoDefaultFont,
    #[error("Layout coordinates overflowed at fragment {0}.")]
    CoordinateOverflow(usize),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

pub mod config;
pub mod engine;
pub mod fonts;
pub mod fragment;

pub use self::config::RendererConfig;
pub use self::engine::{Renderer, RendererState};
pub use self::fonts::TrueTypeFont;
#[cfg(feature = "system-fonts")]
pub use self::fonts::SystemFontLibrary;
pub use self::fragment::{Fragment, FragmentKind, FragmentSnapshot, ImageFragment, TextFragment};

// Re-export geometry types used in fragments to prevent type mismatches
pub use inkline_types::geometry::{Bounds, Point, Rect, Size};

#[cfg(test)]
mod test_utils;
