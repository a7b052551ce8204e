//! Cue Scanner - cue sheet parsing and track materialization
//!
//! This library reads CUE sheets (sidecar `.cue` files or cue text embedded
//! in audio tags), resolves the media files they reference and turns each
//! sheet track into a library track, reconciled with the audio file's tag.

pub mod cue;
pub mod library;
pub mod model;
pub mod scan;

/// Separator used between values of multi-valued fields
pub const DEFAULT_ITEM_SEPARATOR: &str = " / ";

pub use cue::{CueDocument, CueError};
pub use scan::{ScanConfig, ScanPipeline};
