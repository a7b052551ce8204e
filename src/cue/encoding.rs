//! Text decoding for cue sheets
//!
//! Rippers write sheets in whatever the local code page was, so the bytes
//! are sniffed before tokenizing: BOM first, then strict UTF-8, then a
//! chardetng guess decoded through encoding_rs.

use std::io;
use std::path::Path;

/// Decode raw sheet bytes to a String
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(b"\xEF\xBB\xBF") {
        return String::from_utf8_lossy(rest).into_owned();
    }

    if let Some(rest) = bytes.strip_prefix(b"\xFF\xFE") {
        let (decoded, _, _) = encoding_rs::UTF_16LE.decode(rest);
        return decoded.into_owned();
    }

    if let Some(rest) = bytes.strip_prefix(b"\xFE\xFF") {
        let (decoded, _, _) = encoding_rs::UTF_16BE.decode(rest);
        return decoded.into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_owned();
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    log::debug!("Cue text is not UTF-8, decoding as {}", encoding.name());
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Read and decode a sheet from disk
pub fn read_text_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes))
}
