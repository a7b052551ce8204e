use super::{AudioTag, Track};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which record an item's metadata should be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataSource {
    /// The audio file's own tag
    Tag,
    /// The cue sheet
    Sheet,
}

/// Final record for one logical track found during a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScannedItem {
    /// Sheet-derived track whose file tag is authoritative
    Tagged { track: Track, tag: AudioTag },
    /// Sheet-derived track used as is
    Sheet(Track),
}

impl ScannedItem {
    pub fn source(&self) -> MetadataSource {
        match self {
            ScannedItem::Tagged { .. } => MetadataSource::Tag,
            ScannedItem::Sheet(_) => MetadataSource::Sheet,
        }
    }

    /// The reconciled sheet track (offsets always come from here)
    pub fn track(&self) -> &Track {
        match self {
            ScannedItem::Tagged { track, .. } => track,
            ScannedItem::Sheet(track) => track,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.track().file_path
    }

    /// Title from the primary source
    pub fn title(&self) -> &str {
        match self {
            ScannedItem::Tagged { tag, .. } => &tag.title,
            ScannedItem::Sheet(track) => &track.title,
        }
    }

    /// Artist from the primary source
    pub fn artist(&self) -> &str {
        match self {
            ScannedItem::Tagged { tag, .. } => &tag.artist,
            ScannedItem::Sheet(track) => &track.artist_desc,
        }
    }

    /// Album from the primary source
    pub fn album(&self) -> &str {
        match self {
            ScannedItem::Tagged { tag, .. } => &tag.album,
            ScannedItem::Sheet(track) => &track.album,
        }
    }
}
