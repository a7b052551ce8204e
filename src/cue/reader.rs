//! Line sources feeding the cue parser
//!
//! Both sources yield trimmed, non-empty lines and never rewind.

use super::encoding::read_text_file;
use std::path::Path;

/// Source of logical cue sheet lines
pub trait LineSource {
    /// Whether the source was opened and has content to offer
    fn ready(&self) -> bool;

    /// Next trimmed, non-empty line, or `None` once exhausted
    fn next_line(&mut self) -> Option<String>;
}

/// Lines from an in-memory sheet (e.g. a cue sheet embedded in a tag)
#[derive(Debug, Clone)]
pub struct BufferLineSource {
    data: String,
    pos: usize,
}

impl BufferLineSource {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }
}

impl LineSource for BufferLineSource {
    fn ready(&self) -> bool {
        !self.data.is_empty()
    }

    fn next_line(&mut self) -> Option<String> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let (raw, consumed) = match rest.find(|c: char| c == '\r' || c == '\n') {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len()),
            };
            self.pos += consumed;

            let line = raw.trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }
        None
    }
}

/// Lines from a sheet on disk
///
/// The file is decoded up front so legacy code pages come out as UTF-8.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    inner: Option<BufferLineSource>,
}

impl FileLineSource {
    pub fn open(path: &Path) -> Self {
        let inner = match read_text_file(path) {
            Ok(text) => Some(BufferLineSource::new(text)),
            Err(e) => {
                log::error!("Failed to open cue sheet {:?}: {}", path, e);
                None
            }
        };
        Self { inner }
    }
}

impl LineSource for FileLineSource {
    fn ready(&self) -> bool {
        self.inner.as_ref().is_some_and(|source| source.ready())
    }

    fn next_line(&mut self) -> Option<String> {
        self.inner.as_mut()?.next_line()
    }
}
