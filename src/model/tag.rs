use serde::{Deserialize, Serialize};

/// Embedded cover art carried alongside a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverArt {
    /// Raw image bytes as stored in the tag
    pub data: Vec<u8>,

    /// MIME type of the image
    pub mime_type: String,
}

/// Metadata read from the tag of one physical audio file
///
/// Every field may be missing independently. `loaded` is false when the
/// file carried no readable tag at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTag {
    /// Whether a tag was found and read
    pub loaded: bool,

    pub title: String,

    /// Track artist, as a single display string
    pub artist: String,

    pub album_artists: Vec<String>,

    pub album: String,

    pub genres: Vec<String>,

    /// Release year (0 = unknown)
    pub year: u32,

    /// Disc number (0 = unknown)
    pub disc_number: u32,

    /// Audio stream duration in milliseconds
    pub duration_ms: u64,

    /// Cue sheet text embedded in the tag (FLAC CUESHEET, APE Cuesheet, ...)
    pub cue_sheet: Option<String>,

    pub cover_art: Option<CoverArt>,
}

impl AudioTag {
    /// Release date string for the tag's year
    pub fn release_date(&self) -> Option<String> {
        (self.year > 0).then(|| format!("{:04}", self.year))
    }

    /// Album, artist and title are all present
    pub fn is_complete(&self) -> bool {
        self.loaded && !self.album.is_empty() && !self.artist.is_empty() && !self.title.is_empty()
    }
}
