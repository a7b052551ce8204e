//! Tag reader trait definitions

use crate::model::AudioTag;
use anyhow::Result;
use std::path::Path;

/// Source of embedded tag data for audio files
///
/// Lets the scanner run with real tag parsing or with tags disabled.
pub trait TagReader {
    /// Read the tag of one audio file
    ///
    /// A file without any tag is not an error: the returned tag simply
    /// has `loaded == false`.
    fn read_tag(&self, audio_path: &Path) -> Result<AudioTag>;
}

/// Tag reader that never looks inside files
///
/// Sheets are used as is; open-ended tracks keep a zero duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTagReader;

impl NoTagReader {
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for NoTagReader {
    fn read_tag(&self, audio_path: &Path) -> Result<AudioTag> {
        log::trace!("Tag reading disabled, skipping {:?}", audio_path);
        Ok(AudioTag::default())
    }
}
