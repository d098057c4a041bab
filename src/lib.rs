//! # Ad Resizer
//!
//! Render one source image into a fixed set of ad placements ("formats"),
//! each at its exact pixel size, by cover-fit compositing instead of
//! stretching.
//!
//! # Architecture: Decode Once, Render Many
//!
//! ```text
//! bytes ──decode──▶ SourceImage ──generate──▶ [ResizedAsset; n] ──export──▶ ad-<id>.png
//!                        │             │
//!                        │        FormatCatalog (order, sizes)
//!                        └── resize(source, w, h) per format
//! ```
//!
//! Decoding is the only step that depends on the input encoding, and it
//! completes before generation starts. Everything after it is a pure function
//! of the decoded pixels and the catalog: no global state, no caching, the
//! same inputs always produce byte-identical PNGs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Ordered registry of ad formats; stock seed and lookup by id |
//! | [`imaging`] | Placement math, the [`ImageBackend`](imaging::ImageBackend) trait, compositor, PNG encoding |
//! | [`generate`] | Batch generation over the selected formats, all-or-nothing |
//! | [`session`] | Caller-held state: current source, selection toggles, last results |
//! | [`export`] | Writes assets as `ad-<id>.png` |
//! | [`config`] | `ad-resizer.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//! | [`types`] | `AdFormat`, `SourceImage`, `ResizedAsset` |
//!
//! # Design Decisions
//!
//! ## Cover-Fit Geometry
//!
//! The source is scaled, keeping its aspect ratio, until it covers the canvas
//! on both axes, and then centered: a relatively wider source has its height
//! matched, a relatively taller one its width. One offset is zero and the
//! other is zero or negative, so any overhang is cropped evenly from both
//! ends. Transparent areas are laid over opaque white.
//!
//! ## PNG-Only Output
//!
//! Output is always lossless PNG. No format negotiation, no quality knobs
//! that could change pixels; the compression setting only trades speed
//! against file size.
//!
//! ## Sequential, Fail-Fast Batches
//!
//! Formats are rendered one after another in catalog order. A failure on
//! any format fails the whole batch and returns nothing, so a caller never
//! has to reconcile a half-finished set.

pub mod catalog;
pub mod config;
pub mod export;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod session;
pub mod types;
