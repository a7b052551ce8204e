use super::error::CueError;
use super::parser::parse;
use super::reader::{BufferLineSource, FileLineSource};
use crate::model::ReplayGainInfo;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One TRACK entry as read from the sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueTrack {
    /// Explicit TRACK number, or 1-based parse order when missing
    pub track_number: u32,

    pub title: String,

    /// Track performer; empty means "use the album performer"
    pub artist: String,

    /// FILE active when the track was declared
    pub file: PathBuf,

    /// INDEX 01 position in milliseconds
    pub start_ms: u64,

    /// Next track's INDEX 01 in the same file, 0 = until end of file
    pub end_ms: u64,

    pub replay_gain: ReplayGainInfo,
}

/// A fully parsed cue sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueDocument {
    /// Album performer
    pub artist: String,

    /// Album title
    pub album: String,

    /// Genre, possibly several joined by the item separator
    pub genre: String,

    /// Release year (0 = unknown)
    pub year: u32,

    /// Disc number (0 = unknown)
    pub disc_number: u32,

    pub album_gain: ReplayGainInfo,

    pub tracks: Vec<CueTrack>,

    /// Every track lives in its own FILE
    pub one_file_per_track: bool,
}

impl CueDocument {
    /// Parse a sheet on disk; FILE references are resolved next to it
    pub fn from_file(path: &Path) -> Result<Self, CueError> {
        let mut source = FileLineSource::open(path);
        parse(&mut source, Some(path))
    }

    /// Parse a sheet stored in a tag; FILE references are kept verbatim
    pub fn from_embedded(text: &str) -> Result<Self, CueError> {
        let mut source = BufferLineSource::new(text);
        parse(&mut source, None)
    }

    pub fn is_loaded(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn is_one_file_per_track(&self) -> bool {
        self.one_file_per_track
    }

    /// Point every track of `old` at `new`
    pub fn update_media_file(&mut self, old: &Path, new: &Path) {
        for track in self.tracks.iter_mut().filter(|t| t.file == old) {
            track.file = new.to_path_buf();
        }
    }

    /// Distinct media files referenced by the tracks, sorted
    pub fn media_files(&self) -> Vec<PathBuf> {
        self.tracks
            .iter()
            .map(|t| t.file.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
