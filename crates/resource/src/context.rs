//! The resource context a layout pass resolves its references against.

use crate::error::RegistryError;
use crate::font_cache::{FontCache, MAX_POINT_SIZE};
use crate::palette::CSS_COLORS;
use crate::registry::{Registry, RegistryEntry};
use inkline_traits::{FontHandle, ImageHandle};
use inkline_types::Color;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextConfig {
    /// Largest point size a font cache will create. Defaults to `256`.
    pub max_point_size: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_point_size: MAX_POINT_SIZE,
        }
    }
}

/// Registered strings, colors, sizes, images and font families.
///
/// All registration happens through `&mut self`, so it is complete before
/// any renderer borrows the context for layout.
#[derive(Debug, Default)]
pub struct Context {
    config: ContextConfig,
    registry: Registry,
    fonts: HashMap<String, FontCache>,
    default_font: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers a font family, returning the name it was stored under.
    ///
    /// With no `name`, the font's own family name is used. The first font
    /// registered becomes the default font.
    ///
    /// # Errors
    ///
    /// - `UnnamedFont` if no name is given and the font reports none
    /// - `DuplicateFont` if a font is already registered under the name
    pub fn register_font(
        &mut self,
        font: FontHandle,
        name: Option<&str>,
    ) -> Result<String, RegistryError> {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            Some(_) => return Err(RegistryError::EmptyKey),
            None => font.family_name().ok_or(RegistryError::UnnamedFont)?,
        };

        if self.fonts.contains_key(&name) {
            return Err(RegistryError::DuplicateFont(name));
        }

        log::debug!("Registering font '{}' at {}pt", name, font.point_size());
        let cache = FontCache::new(name.clone(), font, self.config.max_point_size);
        self.fonts.insert(name.clone(), cache);

        if self.default_font.is_none() {
            log::debug!("Font '{}' is now the default font", name);
            self.default_font = Some(name.clone());
        }

        Ok(name)
    }

    pub fn register_string(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.register(key.into(), RegistryEntry::String(value.into()))
    }

    pub fn register_color(
        &mut self,
        key: impl Into<String>,
        color: Color,
    ) -> Result<(), RegistryError> {
        self.register(key.into(), RegistryEntry::Color(color))
    }

    /// # Errors
    ///
    /// `PointSizeOutOfRange` for a zero size.
    pub fn register_size(
        &mut self,
        key: impl Into<String>,
        point_size: u32,
    ) -> Result<(), RegistryError> {
        if point_size == 0 {
            return Err(RegistryError::PointSizeOutOfRange {
                size: 0,
                max: self.config.max_point_size,
            });
        }
        self.register(key.into(), RegistryEntry::Size(point_size))
    }

    pub fn register_image(
        &mut self,
        key: impl Into<String>,
        image: ImageHandle,
    ) -> Result<(), RegistryError> {
        self.register(key.into(), RegistryEntry::Image(image))
    }

    /// Registers the standard named colors (`black`, `red`, `gold`, ...).
    pub fn register_css_colors(&mut self) {
        for (name, color) in CSS_COLORS {
            self.registry.insert(name, RegistryEntry::Color(color));
        }
        log::debug!("Registered {} CSS colors", CSS_COLORS.len());
    }

    // Non-font keys overwrite silently.
    fn register(&mut self, key: String, entry: RegistryEntry) -> Result<(), RegistryError> {
        if key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        log::trace!("Registering {} '{}'", entry.kind(), key);
        self.registry.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.registry.get(key)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn font(&self, name: &str) -> Option<&FontCache> {
        self.fonts.get(name)
    }

    pub fn fonts(&self) -> impl Iterator<Item = (&str, &FontCache)> {
        self.fonts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn default_font_name(&self) -> Option<&str> {
        self.default_font.as_deref()
    }

    pub fn default_font(&self) -> Option<&FontCache> {
        self.default_font.as_deref().and_then(|name| self.fonts.get(name))
    }
}
