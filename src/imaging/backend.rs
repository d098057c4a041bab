//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: decode raw bytes into a [`SourceImage`], and composite a source
//! onto a canvas described by [`CompositeParams`], returning encoded bytes.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::CompositeParams;
use crate::types::SourceImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "Invalid dimensions: source {}x{}, target {}x{}",
        .source_size.0, .source_size.1, .target_size.0, .target_size.1
    )]
    InvalidDimensions {
        source_size: (u32, u32),
        target_size: (u32, u32),
    },
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode an encoded image (format sniffed from content).
    fn decode(&self, bytes: &[u8]) -> Result<SourceImage, BackendError>;

    /// Render `source` onto a white canvas and encode the result.
    fn composite(
        &self,
        source: &SourceImage,
        params: &CompositeParams,
    ) -> Result<Vec<u8>, BackendError>;
}
