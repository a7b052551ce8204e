use thiserror::Error;

/// Fatal cue sheet parse failures
///
/// Any of these discards the whole document.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("Cue source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Mangled time in INDEX 01 line: {line}")]
    MalformedTime { line: String },

    #[error("Track {track} is split over multiple files")]
    TrackSplitAcrossFiles { track: u32 },

    #[error("No INDEX 01 tags in cue sheet")]
    NoTracks,
}
