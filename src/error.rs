// src/error.rs
use inkline_layout::LayoutError;
use inkline_markup::MarkupError;
use inkline_resource::RegistryError;
use inkline_traits::FontError;
use thiserror::Error;

/// A comprehensive error type for markup → layout.
#[derive(Error, Debug)]
pub enum InklineError {
    #[error("Parsing failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
