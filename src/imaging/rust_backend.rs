//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader` with content sniffing |
//! | Crop to visible slice | `image::imageops::crop_imm` |
//! | Scale | `image::imageops::resize` with `Triangle` filter |
//! | Place on white canvas | `image::imageops::overlay` |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, adaptive row filter |
//!
//! ## Compositing
//!
//! The [`Placement`](super::calculations::Placement) rectangle is intersected
//! with the canvas and the visible part mapped back to a source slice, so
//! only the pixels that will be shown are resampled. An overhanging source
//! never gets scaled to its full draw size. The slice is flattened onto white
//! and then scaled to the visible canvas span and overlaid. Span edges snap
//! to whole pixels, so the slice may shift by up to half a source pixel.

use super::backend::{BackendError, ImageBackend};
use super::params::{BACKGROUND, Compression, CompositeParams};
use crate::types::SourceImage;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions mapped to the decoders they need.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
    ("gif", ImageFormat::Gif),
    ("bmp", ImageFormat::Bmp),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` looks like an image this backend can decode.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let e = e.to_ascii_lowercase();
            supported_input_extensions().contains(&e.as_str())
        })
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Resampling filter for the scaled source.
///
/// `Triangle` is bilinear, widened on downscales so every source pixel under
/// an output pixel contributes.
const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// The part of one axis where the scaled source is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    canvas_start: u32,
    canvas_len: u32,
    source_start: u32,
    source_len: u32,
}

/// Intersect the placement with the canvas on one axis and map the visible
/// part back to source pixels.
///
/// `offset` and `draw` are the placement's position and extent on this axis,
/// in canvas pixels. `src_len` must be non-zero. Returns `None` when the
/// source covers less than half a canvas pixel.
fn visible_span(out_len: u32, src_len: u32, offset: f64, draw: f64) -> Option<Span> {
    let start = offset.max(0.0);
    let end = (offset + draw).min(out_len as f64);
    let canvas_start = start.round() as u32;
    let canvas_end = (end.round() as u32).min(out_len);
    if canvas_end <= canvas_start {
        return None;
    }

    let scale = src_len as f64 / draw;
    let source_start = (((start - offset) * scale).round() as u32).min(src_len - 1);
    let source_end = (((end - offset) * scale).round() as u32).clamp(source_start + 1, src_len);

    Some(Span {
        canvas_start,
        canvas_len: canvas_end - canvas_start,
        source_start,
        source_len: source_end - source_start,
    })
}

/// Lay every pixel over the opaque background.
///
/// Resampling the flattened image equals resampling in premultiplied alpha
/// and flattening afterwards, so transparent pixels never bleed colour.
fn flatten_onto_background(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let alpha = px[3] as f32 / 255.0;
        for i in 0..3 {
            let blended = px[i] as f32 * alpha + BACKGROUND[i] as f32 * (1.0 - alpha);
            px[i] = blended.round().clamp(0.0, 255.0) as u8;
        }
        px[3] = 0xFF;
    }
}

/// Composite `source` onto a background-filled canvas.
fn render(source: &RgbaImage, params: &CompositeParams) -> RgbaImage {
    let p = params.placement;
    let mut canvas = RgbaImage::from_pixel(params.width, params.height, Rgba(BACKGROUND));

    let cols = visible_span(params.width, source.width(), p.offset_x, p.draw_width);
    let rows = visible_span(params.height, source.height(), p.offset_y, p.draw_height);
    let (Some(cols), Some(rows)) = (cols, rows) else {
        return canvas;
    };

    let mut visible = imageops::crop_imm(
        source,
        cols.source_start,
        rows.source_start,
        cols.source_len,
        rows.source_len,
    )
    .to_image();
    flatten_onto_background(&mut visible);

    let scaled = if visible.dimensions() == (cols.canvas_len, rows.canvas_len) {
        visible
    } else {
        imageops::resize(&visible, cols.canvas_len, rows.canvas_len, RESAMPLE_FILTER)
    };
    imageops::overlay(
        &mut canvas,
        &scaled,
        cols.canvas_start as i64,
        rows.canvas_start as i64,
    );

    canvas
}

/// Encode an RGBA canvas as PNG.
fn encode_png(canvas: &RgbaImage, compression: Compression) -> Result<Vec<u8>, BackendError> {
    let level = match compression {
        Compression::Fast => CompressionType::Fast,
        Compression::Default => CompressionType::Default,
        Compression::Best => CompressionType::Best,
    };
    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, level, PngFilter::Adaptive)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| BackendError::Encode(format!("PNG encode failed: {e}")))?;
    Ok(bytes)
}

impl ImageBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<SourceImage, BackendError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| BackendError::UnsupportedInput("not a recognized image".into()))?;
        if !format.reading_enabled() {
            return Err(BackendError::UnsupportedInput(format!(
                "{format:?} decoding is not compiled in"
            )));
        }
        let img = reader
            .decode()
            .map_err(|e| BackendError::Decode(format!("Failed to decode {format:?}: {e}")))?;
        Ok(SourceImage::from(img))
    }

    fn composite(
        &self,
        source: &SourceImage,
        params: &CompositeParams,
    ) -> Result<Vec<u8>, BackendError> {
        let p = params.placement;
        if source.width() == 0
            || source.height() == 0
            || params.width == 0
            || params.height == 0
            || p.draw_width <= 0.0
            || p.draw_height <= 0.0
        {
            return Err(BackendError::InvalidDimensions {
                source_size: source.dimensions(),
                target_size: (params.width, params.height),
            });
        }
        let canvas = render(source.pixels(), params);
        encode_png(&canvas, params.compression)
    }
}
