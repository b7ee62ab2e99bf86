//! Per-family cache of lazily created point-size variants.

use crate::error::RegistryError;
use inkline_traits::FontHandle;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Default ceiling for point-size lookups.
pub const MAX_POINT_SIZE: u32 = 256;

/// One font family: the registered base font plus every size derived from it.
///
/// Variants are created on first request by copying the base font and are
/// kept for the lifetime of the cache. Lookups take `&self` so several
/// renderers can share one context.
#[derive(Debug)]
pub struct FontCache {
    name: String,
    base: FontHandle,
    max_point_size: u32,
    sizes: RwLock<BTreeMap<u32, FontHandle>>,
}

impl FontCache {
    pub fn new(name: impl Into<String>, base: FontHandle, max_point_size: u32) -> Self {
        let mut sizes = BTreeMap::new();
        sizes.insert(base.point_size(), base.clone());
        Self {
            name: name.into(),
            base,
            max_point_size,
            sizes: RwLock::new(sizes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &FontHandle {
        &self.base
    }

    /// Returns the variant at `point_size`, creating it if needed.
    ///
    /// # Errors
    ///
    /// - `PointSizeOutOfRange` for zero or sizes above the cache ceiling
    /// - `Font` when the font engine cannot copy the base font
    pub fn query(&self, point_size: u32) -> Result<FontHandle, RegistryError> {
        if point_size == 0 || point_size > self.max_point_size {
            return Err(RegistryError::PointSizeOutOfRange {
                size: point_size,
                max: self.max_point_size,
            });
        }

        {
            let sizes = self
                .sizes
                .read()
                .map_err(|_| RegistryError::CachePoisoned(self.name.clone()))?;
            if let Some(font) = sizes.get(&point_size) {
                return Ok(font.clone());
            }
        }

        let mut sizes = self
            .sizes
            .write()
            .map_err(|_| RegistryError::CachePoisoned(self.name.clone()))?;
        // Another reader may have created it between the two locks
        if let Some(font) = sizes.get(&point_size) {
            return Ok(font.clone());
        }

        let font = self.base.copy_at_size(point_size)?;
        log::debug!("Created {}pt variant of font '{}'", point_size, self.name);
        sizes.insert(point_size, font.clone());
        Ok(font)
    }

    /// Number of sizes currently cached, the base included.
    pub fn cached_sizes(&self) -> usize {
        self.sizes.read().map(|s| s.len()).unwrap_or(0)
    }
}
