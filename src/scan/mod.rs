//! Directory scanning for cue sheets

pub mod config;
pub mod pipeline;

pub use config::ScanConfig;
pub use pipeline::{ScanPipeline, AUDIO_EXTENSIONS};
