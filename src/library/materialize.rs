//! Conversion of parsed cue tracks into output tracks

use crate::cue::CueDocument;
use crate::model::{millis_to_secs_rounded, ReplayGain, Track, DISC_SHIFT};

/// Split a multi-value field on the item separator
///
/// Pieces are trimmed and empty pieces dropped, so an empty field yields
/// an empty list.
pub fn split_items(value: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        let value = value.trim();
        return if value.is_empty() {
            Vec::new()
        } else {
            vec![value.to_string()]
        };
    }

    value
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build output tracks for every track in the sheet, in sheet order
///
/// Album-level fields are inherited here; durations of open-ended tracks
/// stay 0 until the file length is known.
pub fn materialize(doc: &CueDocument, separator: &str) -> Vec<Track> {
    let album_artists = split_items(&doc.artist, separator);
    let genres = split_items(&doc.genre, separator);
    let release_date = if doc.year > 0 {
        format!("{:04}", doc.year)
    } else {
        String::new()
    };

    doc.tracks
        .iter()
        .map(|cue_track| {
            let artist_desc = if cue_track.artist.is_empty() {
                doc.artist.clone()
            } else {
                cue_track.artist.clone()
            };

            let mut track_number = cue_track.track_number;
            if doc.disc_number > 0 {
                track_number |= doc.disc_number << DISC_SHIFT;
            }

            let title = if cue_track.title.is_empty() {
                format!("Track {:02}", cue_track.track_number)
            } else {
                cue_track.title.clone()
            };

            let duration_secs = if cue_track.end_ms == 0 {
                0
            } else {
                millis_to_secs_rounded(cue_track.end_ms.saturating_sub(cue_track.start_ms))
            };

            let mut replay_gain = ReplayGain::default();
            if doc.album_gain.is_valid() {
                replay_gain.album = doc.album_gain;
            }
            if cue_track.replay_gain.is_valid() {
                replay_gain.track = cue_track.replay_gain;
            }

            Track {
                title,
                artist_desc,
                album_artists: album_artists.clone(),
                album: doc.album.clone(),
                genres: genres.clone(),
                release_date: release_date.clone(),
                track_number,
                file_path: cue_track.file.clone(),
                start_offset_ms: cue_track.start_ms,
                end_offset_ms: cue_track.end_ms,
                duration_secs,
                replay_gain,
                cue_sheet: None,
                embedded_art: None,
            }
        })
        .collect()
}
