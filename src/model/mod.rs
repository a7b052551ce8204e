//! Data model for tracks produced from cue sheets
//!
//! These types are independent of how a sheet was read (sidecar file or
//! embedded tag) and of where the results are consumed.

mod item;
mod library;
mod replay_gain;
mod tag;
mod track;

pub use item::{MetadataSource, ScannedItem};
pub use library::Library;
pub use replay_gain::{ReplayGain, ReplayGainInfo};
pub use tag::{AudioTag, CoverArt};
pub use track::{millis_to_secs_rounded, Track, DISC_SHIFT};
