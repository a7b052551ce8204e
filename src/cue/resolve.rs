//! Resolution of FILE references against the sheet's own directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of resolving a FILE reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// The file exists under the referenced name
    Exact(PathBuf),
    /// Found by a case-insensitive directory scan
    CaseInsensitive(PathBuf),
    /// Nothing matched; carries the best-effort same-directory path
    Unresolved(PathBuf),
}

impl ResolvedPath {
    pub fn found(&self) -> bool {
        !matches!(self, ResolvedPath::Unresolved(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            ResolvedPath::Exact(p) | ResolvedPath::CaseInsensitive(p) | ResolvedPath::Unresolved(p) => p,
        }
    }

    pub fn into_path_buf(self) -> PathBuf {
        match self {
            ResolvedPath::Exact(p) | ResolvedPath::CaseInsensitive(p) | ResolvedPath::Unresolved(p) => p,
        }
    }
}

/// Resolve a FILE value relative to the sheet at `sheet_path`
///
/// Only the file name of `candidate` is kept; directories in the reference
/// (absolute paths from the ripping machine, Windows separators) are dropped
/// and the file is looked up next to the sheet.
pub fn resolve_media_path(candidate: &str, sheet_path: &Path) -> ResolvedPath {
    let directory = match sheet_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = candidate
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(candidate);
    let joined = directory.join(file_name);

    if joined.exists() {
        return ResolvedPath::Exact(joined);
    }

    match find_case_insensitive(directory, file_name) {
        Ok(Some(found)) => {
            log::debug!("Resolved {:?} to {:?} ignoring case", joined, found);
            ResolvedPath::CaseInsensitive(found)
        }
        Ok(None) => {
            log::error!(
                "Could not find {:?} referenced in cue, case sensitivity issue?",
                joined
            );
            ResolvedPath::Unresolved(joined)
        }
        Err(e) => {
            log::error!("Failed to list {:?} while resolving {:?}: {}", directory, joined, e);
            ResolvedPath::Unresolved(joined)
        }
    }
}

fn find_case_insensitive(directory: &Path, file_name: &str) -> walkdir::Result<Option<PathBuf>> {
    let wanted = file_name.to_lowercase();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_name().to_string_lossy().to_lowercase() == wanted {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}
