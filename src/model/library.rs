use super::ScannedItem;
use std::path::{Path, PathBuf};

/// Everything found by one scan: reconciled tracks plus sheet bookkeeping
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Scanned items, grouped by file and ordered by track number
    items: Vec<ScannedItem>,

    /// Cue sheets (sidecar or embedded) that parsed successfully
    sheets: Vec<PathBuf>,

    /// Cue sheets that failed to parse
    failed_sheets: Vec<PathBuf>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parsed sheet together with the items it produced
    pub fn add_sheet(&mut self, sheet: PathBuf, items: Vec<ScannedItem>) {
        self.sheets.push(sheet);
        self.items.extend(items);
    }

    /// Record a sheet that could not be parsed
    pub fn add_failure(&mut self, sheet: PathBuf) {
        self.failed_sheets.push(sheet);
    }

    /// Fold another partial result into this one
    pub fn merge(&mut self, other: Library) {
        self.items.extend(other.items);
        self.sheets.extend(other.sheets);
        self.failed_sheets.extend(other.failed_sheets);
    }

    /// Order items by file, then track number, and sheets by path
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            a.file_path()
                .cmp(b.file_path())
                .then(a.track().track_number.cmp(&b.track().track_number))
        });
        self.sheets.sort();
        self.failed_sheets.sort();
    }

    /// Get all scanned items
    pub fn items(&self) -> &[ScannedItem] {
        &self.items
    }

    /// Items that belong to one audio file
    pub fn items_for_file<'a>(&'a self, file: &'a Path) -> impl Iterator<Item = &'a ScannedItem> {
        self.items.iter().filter(move |item| item.file_path() == file)
    }

    pub fn sheets(&self) -> &[PathBuf] {
        &self.sheets
    }

    pub fn failed_sheets(&self) -> &[PathBuf] {
        &self.failed_sheets
    }

    /// Total number of scanned items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of sheets that parsed
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}
