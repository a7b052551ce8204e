//! Cue sheet parsing
//!
//! Reads `.cue` sidecar files (or cue text embedded in a tag) and turns
//! them into a [`CueDocument`]: album-level fields plus the ordered list
//! of tracks with their offsets inside the referenced audio files.

mod document;
mod encoding;
mod error;
mod fields;
mod parser;
mod reader;
mod resolve;

pub use document::{CueDocument, CueTrack};
pub use encoding::decode_text;
pub use error::CueError;
pub use fields::FRAMES_PER_SECOND;
pub use parser::parse;
pub use reader::{BufferLineSource, FileLineSource, LineSource};
pub use resolve::{resolve_media_path, ResolvedPath};
