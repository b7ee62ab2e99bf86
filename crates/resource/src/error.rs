use inkline_traits::FontError;
use thiserror::Error;

/// Error type for registrations and font size resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Font '{0}' is already registered")]
    DuplicateFont(String),

    #[error("Cannot determine font name: no name given and the font has no family name")]
    UnnamedFont,

    #[error("Registry keys must not be empty")]
    EmptyKey,

    #[error("Point size {size} is outside the supported range 1..={max}")]
    PointSizeOutOfRange { size: u32, max: u32 },

    #[error("Font size cache for '{0}' is unavailable: lock poisoned")]
    CachePoisoned(String),

    #[error(transparent)]
    Font(#[from] FontError),
}
