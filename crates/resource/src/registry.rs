//! Named-key store for strings, colors, point sizes and images.

use inkline_traits::ImageHandle;
use inkline_types::Color;
use std::collections::HashMap;

/// A registered resource.
///
/// Strings, colors and sizes are owned copies. Images are shared handles;
/// the texture behind them belongs to the graphics backend.
#[derive(Debug, Clone)]
pub enum RegistryEntry {
    String(String),
    Image(ImageHandle),
    Color(Color),
    Size(u32),
}

impl RegistryEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryEntry::String(_) => "string",
            RegistryEntry::Image(_) => "image",
            RegistryEntry::Color(_) => "color",
            RegistryEntry::Size(_) => "size",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RegistryEntry::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            RegistryEntry::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<u32> {
        match self {
            RegistryEntry::Size(pt) => Some(*pt),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageHandle> {
        match self {
            RegistryEntry::Image(img) => Some(img),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: HashMap<String, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` under `key`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        entry: RegistryEntry,
    ) -> Option<RegistryEntry> {
        let key = key.into();
        let previous = self.entries.insert(key, entry);
        if let Some(prev) = &previous {
            log::debug!("Registry entry of kind '{}' overwritten", prev.kind());
        }
        previous
    }

    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<RegistryEntry> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
