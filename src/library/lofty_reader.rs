//! Tag reader backed by lofty
//!
//! Reads the primary tag (or the first tag present), the stream duration,
//! any embedded cue sheet and the front cover.

use super::materialize::split_items;
use super::tags::TagReader;
use crate::model::{AudioTag, CoverArt};
use anyhow::{Context, Result};
use lofty::file::TaggedFile;
use lofty::picture::PictureType;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;
use std::path::Path;

/// Item keys under which taggers store cue sheet text
const CUE_SHEET_KEYS: &[&str] = &["CUESHEET", "Cuesheet", "cuesheet"];

/// Real tag reader
pub struct LoftyTagReader {
    /// Separator for splitting multi-valued text frames
    separator: String,
}

impl LoftyTagReader {
    pub fn new() -> Self {
        Self {
            separator: crate::DEFAULT_ITEM_SEPARATOR.to_string(),
        }
    }

    /// Use a custom multi-value separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn collect_values(&self, tag: &Tag, key: &ItemKey) -> Vec<String> {
        tag.get_strings(key)
            .flat_map(|value| split_items(value, &self.separator))
            .collect()
    }
}

impl Default for LoftyTagReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for LoftyTagReader {
    fn read_tag(&self, audio_path: &Path) -> Result<AudioTag> {
        let tagged_file = Probe::open(audio_path)
            .with_context(|| format!("Failed to open audio file: {}", audio_path.display()))?
            .read()
            .with_context(|| format!("Failed to read tags from: {}", audio_path.display()))?;

        let mut audio_tag = AudioTag {
            duration_ms: tagged_file.properties().duration().as_millis() as u64,
            ..Default::default()
        };

        let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
            log::debug!("No tags found in {}", audio_path.display());
            return Ok(audio_tag);
        };

        audio_tag.loaded = true;
        audio_tag.title = tag.title().map(|s| s.to_string()).unwrap_or_default();
        audio_tag.artist = tag.artist().map(|s| s.to_string()).unwrap_or_default();
        audio_tag.album = tag.album().map(|s| s.to_string()).unwrap_or_default();
        audio_tag.album_artists = self.collect_values(tag, &ItemKey::AlbumArtist);
        audio_tag.genres = self.collect_values(tag, &ItemKey::Genre);
        audio_tag.year = tag.year().unwrap_or(0);
        audio_tag.disc_number = tag.disk().unwrap_or(0);
        audio_tag.cue_sheet = find_cue_sheet(&tagged_file);
        audio_tag.cover_art = front_cover(tag);

        log::debug!(
            "Read tag from {}: {:?} by {:?} ({} ms)",
            audio_path.display(),
            audio_tag.title,
            audio_tag.artist,
            audio_tag.duration_ms
        );
        Ok(audio_tag)
    }
}

/// Cue sheet text from any tag of the file
fn find_cue_sheet(tagged_file: &TaggedFile) -> Option<String> {
    tagged_file.tags().iter().find_map(|tag| {
        CUE_SHEET_KEYS.iter().find_map(|key| {
            tag.get_string(&ItemKey::Unknown((*key).to_string()))
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string)
        })
    })
}

/// Front cover, or the first picture when none is marked as such
fn front_cover(tag: &Tag) -> Option<CoverArt> {
    let picture = tag
        .pictures()
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| tag.pictures().first())?;

    Some(CoverArt {
        data: picture.data().to_vec(),
        mime_type: picture
            .mime_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "image/jpeg".to_string()),
    })
}
