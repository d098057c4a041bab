//! The registry of ad formats a source image can be rendered into.
//!
//! A [`FormatCatalog`] is an ordered list of [`AdFormat`]s with unique ids.
//! Order matters: batch generation always emits results in catalog order,
//! whatever order the user selected formats in.
//!
//! The stock catalog mirrors the three placements the tool ships with:
//!
//! | id | name | size |
//! |---|---|---|
//! | `fb-ig-square` | FB/IG Square | 1080×1080 |
//! | `ig-story` | IG Story/TikTok | 1080×1920 |
//! | `linkedin-banner` | LinkedIn Banner | 1200×628 |
//!
//! Any other list can be supplied through `[[formats]]` in `config.toml`; no
//! code assumes anything beyond positive integer dimensions.

use crate::types::AdFormat;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown format id: {0}")]
    NotFound(String),
    #[error("Duplicate format id: {0}")]
    DuplicateId(String),
    #[error("Format id must not be empty")]
    EmptyId,
    #[error("Format {id} has invalid dimensions {width}x{height}")]
    ZeroDimension { id: String, width: u32, height: u32 },
}

/// Ordered, immutable set of ad formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCatalog {
    formats: Vec<AdFormat>,
}

/// The formats shipped by default.
pub fn stock_formats() -> Vec<AdFormat> {
    vec![
        AdFormat::new("fb-ig-square", "FB/IG Square", 1080, 1080),
        AdFormat::new("ig-story", "IG Story/TikTok", 1080, 1920),
        AdFormat::new("linkedin-banner", "LinkedIn Banner", 1200, 628),
    ]
}

impl FormatCatalog {
    /// Build a catalog, rejecting empty or duplicate ids and zero dimensions.
    pub fn new(formats: Vec<AdFormat>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for format in &formats {
            if format.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if format.width == 0 || format.height == 0 {
                return Err(CatalogError::ZeroDimension {
                    id: format.id.clone(),
                    width: format.width,
                    height: format.height,
                });
            }
            if !seen.insert(format.id.as_str()) {
                return Err(CatalogError::DuplicateId(format.id.clone()));
            }
        }
        Ok(Self { formats })
    }

    pub fn stock() -> Self {
        Self {
            formats: stock_formats(),
        }
    }

    /// Look up a format by id.
    pub fn get(&self, id: &str) -> Result<&AdFormat, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn find(&self, id: &str) -> Option<&AdFormat> {
        self.formats.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdFormat> {
        self.formats.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.formats.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::stock()
    }
}
