//! Scan configuration

use std::path::PathBuf;

/// Configuration for a scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to scan, or a single `.cue` / audio file
    pub root: PathBuf,

    /// Separator between values of multi-valued fields (artists, genres)
    pub item_separator: String,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Expand audio files whose tag carries a cue sheet
    pub embedded_sheets: bool,
}

impl ScanConfig {
    /// Create a new scan configuration with defaults
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            item_separator: crate::DEFAULT_ITEM_SEPARATOR.to_string(),
            recursive: true,
            embedded_sheets: true,
        }
    }

    /// Set the multi-value separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = separator.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_embedded_sheets(mut self, enabled: bool) -> Self {
        self.embedded_sheets = enabled;
        self
    }
}
