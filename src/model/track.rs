use super::{CoverArt, ReplayGain};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bit offset of the disc number inside a combined track number
pub const DISC_SHIFT: u32 = 16;

/// Single logical track produced from a cue sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist display string
    pub artist_desc: String,

    /// Album artists (album performer split on the item separator)
    pub album_artists: Vec<String>,

    /// Album name
    pub album: String,

    /// Genres (split on the item separator)
    pub genres: Vec<String>,

    /// Release date, four digit year or empty when unknown
    pub release_date: String,

    /// Track number, with the disc number packed into the high 16 bits
    pub track_number: u32,

    /// Audio file holding this track
    pub file_path: PathBuf,

    /// Start of the track inside the file, in milliseconds
    pub start_offset_ms: u64,

    /// End of the track inside the file, 0 = until end of file
    pub end_offset_ms: u64,

    /// Duration in whole seconds (0 = unknown until the file length is known)
    pub duration_secs: u32,

    pub replay_gain: ReplayGain,

    /// Cue sheet text this track was read from, if embedded in a tag
    pub cue_sheet: Option<String>,

    pub embedded_art: Option<CoverArt>,
}

impl Track {
    /// Disc number encoded in the track number (0 = none)
    pub fn disc_number(&self) -> u32 {
        self.track_number >> DISC_SHIFT
    }

    /// Track number within its disc
    pub fn track_in_disc(&self) -> u32 {
        self.track_number & 0xFFFF
    }

    /// Track runs to the end of its file
    pub fn is_open_ended(&self) -> bool {
        self.end_offset_ms == 0
    }
}

/// Round a millisecond span to whole seconds
pub fn millis_to_secs_rounded(ms: u64) -> u32 {
    u32::try_from(ms.saturating_add(500) / 1000).unwrap_or(u32::MAX)
}
