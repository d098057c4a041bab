//! Batch generation: one source image, many ad formats.
//!
//! [`generate`] walks the catalog in order and renders every format whose id
//! is in the selection. Selection order is irrelevant and ids the catalog
//! doesn't know are skipped without complaint, so a stale selection never
//! breaks a batch.
//!
//! ## Failure model
//!
//! The batch is all or nothing. A missing source or an empty selection fails
//! before anything is rendered; a failure while rendering any one format
//! aborts the rest and no assets are returned. Nothing is cached between
//! calls: every call renders from scratch and returns a fresh `Vec`.
//!
//! ## Progress
//!
//! Rendering is sequential and deterministic. Callers that want progress
//! pass a channel sender and receive a [`GenerateEvent`] before the first
//! format and after each one; the core itself never prints.

use crate::catalog::FormatCatalog;
use crate::imaging::{BackendError, Compression, ImageBackend, RustBackend, resize};
use crate::types::{AdFormat, ResizedAsset, SourceImage};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No source image loaded")]
    MissingSource,
    #[error("No ad formats selected")]
    NoFormatsSelected,
    #[error("Failed to render {format}: {source}")]
    Imaging {
        format: String,
        #[source]
        source: BackendError,
    },
}

/// Progress events emitted while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Rendering is about to begin for `formats` catalog entries.
    Started {
        source: (u32, u32),
        formats: usize,
    },
    /// One format finished; `index` is 1-based within the batch.
    Rendered {
        index: usize,
        format: AdFormat,
        bytes: usize,
    },
    /// Every format rendered successfully.
    Finished { count: usize },
}

/// Render `source` into every selected format using the [`RustBackend`].
pub fn generate<S: AsRef<str>>(
    source: Option<&SourceImage>,
    selected: &[S],
    catalog: &FormatCatalog,
    compression: Compression,
    events: Option<Sender<GenerateEvent>>,
) -> Result<Vec<ResizedAsset>, GenerateError> {
    let backend = RustBackend::new();
    generate_with_backend(&backend, source, selected, catalog, compression, events)
}

/// Render using a specific backend (allows testing with mock).
pub fn generate_with_backend<S: AsRef<str>>(
    backend: &impl ImageBackend,
    source: Option<&SourceImage>,
    selected: &[S],
    catalog: &FormatCatalog,
    compression: Compression,
    events: Option<Sender<GenerateEvent>>,
) -> Result<Vec<ResizedAsset>, GenerateError> {
    let source = source.ok_or(GenerateError::MissingSource)?;
    if selected.is_empty() {
        return Err(GenerateError::NoFormatsSelected);
    }

    let is_selected = |format: &&AdFormat| selected.iter().any(|id| id.as_ref() == format.id);
    let formats: Vec<&AdFormat> = catalog.iter().filter(is_selected).collect();

    let emit = |event: GenerateEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is watching
            let _ = tx.send(event);
        }
    };

    emit(GenerateEvent::Started {
        source: source.dimensions(),
        formats: formats.len(),
    });

    let mut assets = Vec::with_capacity(formats.len());
    for (i, format) in formats.into_iter().enumerate() {
        let encoded = resize(backend, source, format.width, format.height, compression)
            .map_err(|e| GenerateError::Imaging {
                format: format.id.clone(),
                source: e,
            })?;

        emit(GenerateEvent::Rendered {
            index: i + 1,
            format: format.clone(),
            bytes: encoded.len(),
        });

        assets.push(ResizedAsset {
            format: format.clone(),
            encoded,
        });
    }

    emit(GenerateEvent::Finished {
        count: assets.len(),
    });

    Ok(assets)
}
