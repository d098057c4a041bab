//! Parameter types for image operations.
//!
//! These structs describe *what* to render, not *how*. They are the interface
//! between [`operations`](super::operations), which validates inputs and
//! computes the placement, and the [`backend`](super::backend), which does the
//! pixel work and encoding. Keeping them apart lets the batch logic run
//! against a mock backend.

use super::calculations::Placement;
use serde::{Deserialize, Serialize};

/// Background behind the composited source. Fixed: opaque white.
pub const BACKGROUND: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// PNG compression effort. Affects file size and speed only, never pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

/// Full specification for one composite: canvas size, placement, encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeParams {
    pub width: u32,
    pub height: u32,
    pub placement: Placement,
    pub compression: Compression,
}
