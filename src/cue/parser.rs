//! Single-pass cue sheet scanner
//!
//! Directives are matched as case-insensitive prefixes in a fixed order;
//! the first match wins and anything unrecognised (FLAGS, ISRC, INDEX 00,
//! other REM comments) is skipped.

use super::document::{CueDocument, CueTrack};
use super::error::CueError;
use super::fields::{extract_index_time, extract_info, extract_number, strip_keyword};
use super::reader::LineSource;
use super::resolve::resolve_media_path;
use std::path::{Path, PathBuf};

/// Parse a cue sheet from `source`
///
/// `sheet_path` is the sheet's own location. When present, FILE references
/// are resolved next to it; when absent (embedded sheets) they are kept
/// as written.
pub fn parse<S>(source: &mut S, sheet_path: Option<&Path>) -> Result<CueDocument, CueError>
where
    S: LineSource + ?Sized,
{
    if !source.ready() {
        let origin = sheet_path.map_or_else(|| "<buffer>".to_string(), |p| p.display().to_string());
        return Err(CueError::SourceUnavailable(origin));
    }

    let mut doc = CueDocument::default();
    let mut current_file = PathBuf::new();
    let mut file_changed = false;
    let mut index_seen = false;
    let mut file_count = 0usize;

    while let Some(line) = source.next_line() {
        if strip_keyword(&line, "INDEX 01").is_some() {
            if file_changed {
                log::error!("Track split over multiple files, unsupported");
                return Err(CueError::TrackSplitAcrossFiles {
                    track: doc.tracks.last().map_or(0, |t| t.track_number),
                });
            }

            let Some(time) = extract_index_time(&line["INDEX".len()..]) else {
                log::error!("Mangled time in INDEX 01 tag in cue sheet: {}", line);
                return Err(CueError::MalformedTime { line });
            };

            if index_seen {
                log::debug!("Ignoring repeated INDEX 01: {}", line);
                continue;
            }

            match doc.tracks.as_mut_slice() {
                [] => {}
                [.., previous, current] => {
                    if previous.file == current_file {
                        if time < previous.start_ms {
                            log::warn!(
                                "INDEX 01 of track {} goes backwards ({} ms < {} ms)",
                                current.track_number,
                                time,
                                previous.start_ms
                            );
                        }
                        previous.end_ms = time;
                    }
                    current.start_ms = time;
                    index_seen = true;
                }
                [current] => {
                    current.start_ms = time;
                    index_seen = true;
                }
            }
        } else if let Some(rest) = strip_keyword(&line, "TITLE") {
            match doc.tracks.last_mut() {
                None => doc.album = extract_info(rest),
                Some(track) => track.title = extract_info(rest),
            }
        } else if let Some(rest) = strip_keyword(&line, "PERFORMER") {
            match doc.tracks.last_mut() {
                None => doc.artist = extract_info(rest),
                Some(track) => track.artist = extract_info(rest),
            }
        } else if let Some(rest) = strip_keyword(&line, "TRACK") {
            let position = doc.tracks.len() as u32 + 1;
            let track_number = extract_number(rest).filter(|n| *n > 0).unwrap_or(position);

            doc.tracks.push(CueTrack {
                track_number,
                file: current_file.clone(),
                ..Default::default()
            });
            file_changed = false;
            index_seen = false;
        } else if let Some(rest) = strip_keyword(&line, "REM DISCNUMBER") {
            if let Some(disc) = extract_number(rest).filter(|n| *n > 0) {
                doc.disc_number = disc;
            }
        } else if let Some(rest) = strip_keyword(&line, "FILE") {
            file_count += 1;
            if !current_file.as_os_str().is_empty() {
                file_changed = true;
            }

            let value = extract_info(rest);
            current_file = match sheet_path {
                Some(sheet) if !value.is_empty() => resolve_media_path(&value, sheet).into_path_buf(),
                _ => PathBuf::from(value),
            };
        } else if let Some(rest) = strip_keyword(&line, "REM DATE") {
            if let Some(year) = extract_number(rest).filter(|y| *y > 0) {
                doc.year = year;
            }
        } else if let Some(rest) = strip_keyword(&line, "REM GENRE") {
            doc.genre = extract_info(rest);
        } else if let Some(rest) = strip_keyword(&line, "REM REPLAYGAIN_ALBUM_GAIN") {
            doc.album_gain.set_gain_str(rest);
        } else if let Some(rest) = strip_keyword(&line, "REM REPLAYGAIN_ALBUM_PEAK") {
            doc.album_gain.set_peak_str(rest);
        } else if let Some(rest) = strip_keyword(&line, "REM REPLAYGAIN_TRACK_GAIN") {
            if let Some(track) = doc.tracks.last_mut() {
                track.replay_gain.set_gain_str(rest);
            }
        } else if let Some(rest) = strip_keyword(&line, "REM REPLAYGAIN_TRACK_PEAK") {
            if let Some(track) = doc.tracks.last_mut() {
                track.replay_gain.set_peak_str(rest);
            }
        }
    }

    let Some(last) = doc.tracks.last_mut() else {
        log::error!("No INDEX 01 tags in CUE file");
        return Err(CueError::NoTracks);
    };
    last.end_ms = 0;

    doc.one_file_per_track = file_count == doc.tracks.len();

    log::debug!(
        "Parsed cue sheet: {} tracks in {} file(s), album {:?}",
        doc.tracks.len(),
        file_count,
        doc.album
    );
    Ok(doc)
}
