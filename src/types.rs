//! Shared types passed between the catalog, the resizer, and the batch generator.

use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named target size a source image is rendered into.
///
/// Formats are immutable once the catalog is built. Dimensions are validated
/// as non-zero by [`FormatCatalog::new`](crate::catalog::FormatCatalog::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdFormat {
    /// Stable identifier, unique within a catalog (e.g. `ig-story`).
    pub id: String,
    /// Human-readable label (e.g. `IG Story/TikTok`).
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl AdFormat {
    pub fn new(id: &str, name: &str, width: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A fully decoded source raster.
///
/// Pixels are stored as RGBA8 behind an `Arc`, so cloning is cheap and a
/// session can hand the same decoded image to every resize call. The
/// resizer only ever reads it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<DynamicImage> for SourceImage {
    fn from(img: DynamicImage) -> Self {
        Self::new(img.into_rgba8())
    }
}

impl From<RgbaImage> for SourceImage {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

/// One rendered format: the target it was rendered for and its PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedAsset {
    pub format: AdFormat,
    pub encoded: Vec<u8>,
}

impl ResizedAsset {
    /// Suggested download name, `ad-<format id>.png`.
    pub fn filename(&self) -> String {
        format!("ad-{}.png", self.format.id)
    }
}
