//! Scan pipeline orchestration

use super::config::ScanConfig;
use crate::cue::CueDocument;
use crate::library::{load_tracks, TagReader};
use crate::model::{AudioTag, Library};
use anyhow::{bail, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Audio file extensions considered for embedded cue sheets
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "flac", "ape", "wv", "wav", "tta", "mp3", "ogg", "opus", "m4a", "aiff", "aif",
];

/// Files found under the scan root
#[derive(Debug, Default)]
struct Discovered {
    sheets: Vec<PathBuf>,
    audio: Vec<PathBuf>,
}

/// Main scan pipeline
pub struct ScanPipeline<R: TagReader + Sync> {
    config: ScanConfig,
    reader: R,
}

impl<R: TagReader + Sync> ScanPipeline<R> {
    /// Create a new scan pipeline
    pub fn new(config: ScanConfig, reader: R) -> Self {
        Self { config, reader }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the complete scan
    ///
    /// Sidecar sheets are scanned first; audio files they reference are not
    /// expanded again from an embedded sheet.
    pub fn scan(&self) -> Result<Library> {
        if !self.config.root.exists() {
            bail!("Scan root does not exist: {:?}", self.config.root);
        }

        log::info!("Scanning {:?}", self.config.root);
        let discovered = self.discover();
        log::info!(
            "Found {} cue sheet(s) and {} audio file(s)",
            discovered.sheets.len(),
            discovered.audio.len()
        );

        // Step 1: sidecar sheets, one worker per sheet
        let sheet_results: Vec<(Library, Vec<PathBuf>)> = discovered
            .sheets
            .par_iter()
            .map(|sheet| self.scan_sheet(sheet))
            .collect();

        let mut library = Library::new();
        let mut covered = HashSet::new();
        for (partial, files) in sheet_results {
            library.merge(partial);
            covered.extend(files);
        }

        // Step 2: audio files carrying their own cue sheet
        if self.config.embedded_sheets {
            let embedded: Vec<Library> = discovered
                .audio
                .par_iter()
                .filter(|audio| !covered.contains(*audio))
                .filter_map(|audio| self.scan_embedded(audio))
                .collect();

            for partial in embedded {
                library.merge(partial);
            }
        }

        library.sort();
        log::info!(
            "Scan complete: {} tracks from {} sheet(s), {} sheet(s) failed",
            library.item_count(),
            library.sheet_count(),
            library.failed_sheets().len()
        );
        Ok(library)
    }

    /// Collect sheets and audio files under the root
    fn discover(&self) -> Discovered {
        let mut discovered = Discovered::default();

        let mut walker = WalkDir::new(&self.config.root)
            .follow_links(true)
            .sort_by_file_name();
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            if has_extension(&path, &["cue"]) {
                discovered.sheets.push(path);
            } else if has_extension(&path, AUDIO_EXTENSIONS) {
                discovered.audio.push(path);
            }
        }

        discovered
    }

    /// Parse one sidecar sheet and reconcile every media file it references
    ///
    /// Returns the partial library and the media files the sheet covers.
    fn scan_sheet(&self, sheet: &Path) -> (Library, Vec<PathBuf>) {
        let mut library = Library::new();

        let doc = match CueDocument::from_file(sheet) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Skipping cue sheet {:?}: {}", sheet, e);
                library.add_failure(sheet.to_path_buf());
                return (library, Vec::new());
            }
        };

        let mut items = Vec::new();
        let mut covered = Vec::new();
        for media in doc.media_files() {
            if !media.is_file() {
                log::warn!("Cue sheet {:?} references missing file {:?}", sheet, media);
                continue;
            }

            let tag = self.read_tag_or_default(&media);
            if let Some(found) = load_tracks(&doc, &media, &tag, &self.config.item_separator) {
                log::debug!("{:?}: {} track(s) in {:?}", sheet, found.len(), media);
                items.extend(found);
            }
            covered.push(media);
        }

        library.add_sheet(sheet.to_path_buf(), items);
        (library, covered)
    }

    /// Expand an audio file whose tag carries a cue sheet
    fn scan_embedded(&self, audio: &Path) -> Option<Library> {
        let tag = self.read_tag_or_default(audio);
        let text = tag.cue_sheet.as_deref()?;

        let mut library = Library::new();
        let mut doc = match CueDocument::from_embedded(text) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Skipping embedded cue sheet in {:?}: {}", audio, e);
                library.add_failure(audio.to_path_buf());
                return Some(library);
            }
        };

        // The embedded sheet names the file it was ripped to, not this one
        for media in doc.media_files() {
            doc.update_media_file(&media, audio);
        }

        let items = load_tracks(&doc, audio, &tag, &self.config.item_separator).unwrap_or_default();
        log::debug!("{:?}: {} track(s) from embedded cue sheet", audio, items.len());
        library.add_sheet(audio.to_path_buf(), items);
        Some(library)
    }

    fn read_tag_or_default(&self, audio: &Path) -> AudioTag {
        match self.reader.read_tag(audio) {
            Ok(tag) => tag,
            Err(e) => {
                log::warn!("Failed to read tag from {:?}: {:#}", audio, e);
                AudioTag::default()
            }
        }
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
