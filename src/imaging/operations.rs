//! High-level image operations.
//!
//! These functions validate inputs, compute the placement, and hand the
//! result to a backend. They never touch pixels themselves.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{Placement, calculate_placement};
use super::params::{Compression, CompositeParams};
use super::rust_backend::is_supported_input;
use crate::types::SourceImage;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan a composite without executing it.
///
/// Fails with [`BackendError::InvalidDimensions`] if either the source or
/// the target has a zero side.
pub fn plan_composite(
    source: (u32, u32),
    target: (u32, u32),
    compression: Compression,
) -> Result<CompositeParams> {
    if source.0 == 0 || source.1 == 0 || target.0 == 0 || target.1 == 0 {
        return Err(BackendError::InvalidDimensions {
            source_size: source,
            target_size: target,
        });
    }
    let placement: Placement = calculate_placement(source, target);
    Ok(CompositeParams {
        width: target.0,
        height: target.1,
        placement,
        compression,
    })
}

/// Render `source` at exactly `target_width x target_height` and encode it.
///
/// No partial output: invalid dimensions fail before the backend is called.
pub fn resize(
    backend: &impl ImageBackend,
    source: &SourceImage,
    target_width: u32,
    target_height: u32,
    compression: Compression,
) -> Result<Vec<u8>> {
    let params = plan_composite(
        source.dimensions(),
        (target_width, target_height),
        compression,
    )?;
    backend.composite(source, &params)
}

/// Read and decode a source image from disk.
///
/// Only files with an image extension the backend can decode are accepted;
/// the content itself is sniffed, so a mislabelled PNG still decodes.
pub fn load_source(backend: &impl ImageBackend, path: &Path) -> Result<SourceImage> {
    if !is_supported_input(path) {
        return Err(BackendError::UnsupportedInput(format!(
            "{} is not a supported image file",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)?;
    backend.decode(&bytes)
}
