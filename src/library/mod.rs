//! From parsed sheets to library tracks
//!
//! Materializes sheet tracks into [`Track`](crate::model::Track) records
//! and reconciles them with the tags of the audio files they point at.

mod lofty_reader;
mod materialize;
mod reconcile;
mod tags;

pub use lofty_reader::LoftyTagReader;
pub use materialize::{materialize, split_items};
pub use reconcile::{load_tracks, reconcile};
pub use tags::{NoTagReader, TagReader};
