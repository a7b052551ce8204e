//! Merging of sheet tracks with the tag of the physical file

use super::materialize::materialize;
use crate::cue::CueDocument;
use crate::model::{millis_to_secs_rounded, AudioTag, ScannedItem, Track, DISC_SHIFT};
use std::path::Path;

/// Reconcile the sheet tracks that live in `file` with that file's tag
///
/// Tracks of other files are skipped. Empty sheet fields are filled from
/// the tag, and an open-ended track gets its duration from the tag's
/// stream length. In a one-file-per-track layout a complete tag becomes
/// the primary source. An empty result means no track matched.
pub fn reconcile(
    tracks: Vec<Track>,
    file: &Path,
    tag: &AudioTag,
    one_file_per_track: bool,
) -> Vec<ScannedItem> {
    tracks
        .into_iter()
        .filter(|track| track.file_path == file)
        .map(|mut track| {
            if tag.loaded {
                fill_from_tag(&mut track, tag);
            }

            if track.duration_secs == 0 && tag.duration_ms > 0 {
                // Open-ended last track: runs to the end of the stream
                track.duration_secs =
                    millis_to_secs_rounded(tag.duration_ms.saturating_sub(track.start_offset_ms));
            }

            if one_file_per_track && tag.is_complete() {
                ScannedItem::Tagged {
                    track,
                    tag: tag.clone(),
                }
            } else {
                ScannedItem::Sheet(track)
            }
        })
        .collect()
}

/// Materialize `doc` and reconcile it against one physical file
///
/// Returns `None` when the sheet has no track in `file`.
pub fn load_tracks(
    doc: &CueDocument,
    file: &Path,
    tag: &AudioTag,
    separator: &str,
) -> Option<Vec<ScannedItem>> {
    let tracks = materialize(doc, separator);
    let items = reconcile(tracks, file, tag, doc.is_one_file_per_track());

    if items.is_empty() {
        log::debug!("Cue sheet has no tracks for {:?}", file);
        None
    } else {
        Some(items)
    }
}

fn fill_from_tag(track: &mut Track, tag: &AudioTag) {
    if track.album.is_empty() && !tag.album.is_empty() {
        track.album = tag.album.clone();
    }
    if track.album_artists.is_empty() && !tag.album_artists.is_empty() {
        track.album_artists = tag.album_artists.clone();
    }
    if track.genres.is_empty() && !tag.genres.is_empty() {
        track.genres = tag.genres.clone();
    }
    if track.artist_desc.is_empty() && !tag.artist.is_empty() {
        track.artist_desc = tag.artist.clone();
    }
    if tag.disc_number > 0 && track.disc_number() == 0 {
        track.track_number |= tag.disc_number << DISC_SHIFT;
    }
    if track.cue_sheet.is_none() {
        track.cue_sheet = tag.cue_sheet.clone();
    }
    if let Some(date) = tag.release_date() {
        track.release_date = date;
    }
    if track.embedded_art.is_none() {
        track.embedded_art = tag.cover_art.clone();
    }
}
