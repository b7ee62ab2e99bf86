//! Named resources for inline text layout.
//!
//! A [`Context`] holds everything markup can refer to by name: strings for
//! substitution, colors, point sizes, images, and font families with their
//! lazily created size variants ([`FontCache`]).

pub mod context;
pub mod error;
pub mod font_cache;
pub mod palette;
pub mod registry;

#[cfg(test)]
mod test_fonts;

pub use context::{Context, ContextConfig};
pub use error::RegistryError;
pub use font_cache::{FontCache, MAX_POINT_SIZE};
pub use palette::CSS_COLORS;
pub use registry::{Registry, RegistryEntry};
