//! Image processing: decode, cover-fit composite, PNG encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (content-sniffed) |
//! | **Placement** | [`calculate_placement`] (pure `f64` geometry) |
//! | **Composite** | bilinear sampler over opaque white |
//! | **Encode** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for placement math (unit testable)
//! - **Parameters**: Data structures describing a composite
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{Fit, Placement, calculate_placement};
pub use operations::{load_source, plan_composite, resize};
pub use params::{BACKGROUND, Compression, CompositeParams};
pub use rust_backend::{RustBackend, supported_input_extensions};
