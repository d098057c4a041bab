//! Caller-owned working state: the current source, the format selection,
//! and the last batch of results.
//!
//! The generator itself is stateless. A `Session` is what an interactive
//! front end keeps between user actions, with two rules:
//!
//! - Loading a new source discards every previous result.
//! - Each [`Session::generate`] replaces the results wholesale, including on
//!   failure, so results never outlive the inputs that produced them.
//!
//! A minimum latency can be configured so results don't flash in and out
//! for fast renders. It only delays the return, never the rendering.

use crate::catalog::FormatCatalog;
use crate::generate::{GenerateError, GenerateEvent, generate_with_backend};
use crate::imaging::{Compression, ImageBackend};
use crate::types::{ResizedAsset, SourceImage};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Session {
    source: Option<SourceImage>,
    selection: Vec<String>,
    results: Vec<ResizedAsset>,
    compression: Compression,
    min_latency: Duration,
}

impl Session {
    pub fn new(compression: Compression, min_latency: Duration) -> Self {
        Self {
            compression,
            min_latency,
            ..Self::default()
        }
    }

    /// Replace the source image. Previous results are dropped.
    pub fn load_source(&mut self, source: SourceImage) {
        self.source = Some(source);
        self.results.clear();
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Add `id` to the selection, or remove it if already selected.
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle_format(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selection.iter().position(|s| s == id) {
            self.selection.remove(pos);
            false
        } else {
            self.selection.push(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    /// Selected ids in the order they were toggled on.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn can_generate(&self) -> bool {
        self.source.is_some() && !self.selection.is_empty()
    }

    /// Render the current selection and keep the results.
    pub fn generate(
        &mut self,
        backend: &impl ImageBackend,
        catalog: &FormatCatalog,
        events: Option<Sender<GenerateEvent>>,
    ) -> Result<&[ResizedAsset], GenerateError> {
        let started = Instant::now();
        self.results.clear();

        let assets = generate_with_backend(
            backend,
            self.source.as_ref(),
            self.selection.as_slice(),
            catalog,
            self.compression,
            events,
        )?;

        if let Some(remaining) = self.min_latency.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }

        self.results = assets;
        Ok(&self.results)
    }

    pub fn results(&self) -> &[ResizedAsset] {
        &self.results
    }
}
