use anyhow::anyhow;
use cue_scanner::library::{NoTagReader, TagReader};
use cue_scanner::model::{AudioTag, MetadataSource};
use cue_scanner::{CueDocument, ScanConfig, ScanPipeline};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Tag reader serving canned tags by path
#[derive(Default)]
struct FakeReader {
    tags: HashMap<PathBuf, AudioTag>,
}

impl FakeReader {
    fn with_tag(mut self, path: PathBuf, tag: AudioTag) -> Self {
        self.tags.insert(path, tag);
        self
    }
}

impl TagReader for FakeReader {
    fn read_tag(&self, audio_path: &Path) -> anyhow::Result<AudioTag> {
        self.tags
            .get(audio_path)
            .cloned()
            .ok_or_else(|| anyhow!("no tag for {}", audio_path.display()))
    }
}

fn complete_tag(title: &str) -> AudioTag {
    AudioTag {
        loaded: true,
        title: title.to_string(),
        artist: "Tag Artist".to_string(),
        album: "Tag Album".to_string(),
        duration_ms: 200_000,
        ..Default::default()
    }
}

const ALBUM_SHEET: &str = r##"REM GENRE "Ambient / Electronic"
REM DATE 1994
PERFORMER "Aphex Twin"
TITLE "Selected Ambient Works Volume II"
FILE "album.flac" WAVE
  TRACK 01 AUDIO
    TITLE "#1"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "#2"
    INDEX 00 07:20:00
    INDEX 01 07:21:37
  TRACK 03 AUDIO
    INDEX 01 15:13:00
"##;

/// Write `content` under the temp dir, creating parent directories
fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_sidecar_sheet_scan() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "album.cue", ALBUM_SHEET.as_bytes());
    let audio = write_file(temp_dir.path(), "album.flac", b"fake audio data");

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();

    assert_eq!(library.sheet_count(), 1);
    assert_eq!(library.item_count(), 3);
    assert!(library.failed_sheets().is_empty());

    let items = library.items();
    assert!(items.iter().all(|i| i.source() == MetadataSource::Sheet));
    assert!(items.iter().all(|i| i.file_path() == audio));

    let first = items[0].track();
    assert_eq!(first.title, "#1");
    assert_eq!(first.artist_desc, "Aphex Twin");
    assert_eq!(first.album, "Selected Ambient Works Volume II");
    assert_eq!(first.genres, vec!["Ambient", "Electronic"]);
    assert_eq!(first.release_date, "1994");
    // 07:21:37 = 441000 + 37 * 1000 / 75 = 441493 ms
    assert_eq!(first.end_offset_ms, 441_493);
    assert_eq!(items[1].track().start_offset_ms, 441_493);

    let last = items[2].track();
    assert_eq!(last.title, "Track 03");
    assert_eq!(last.end_offset_ms, 0);
    assert!(last.is_open_ended());
}

#[test]
fn test_media_reference_is_matched_ignoring_case() {
    let temp_dir = TempDir::new().unwrap();
    let sheet = write_file(
        temp_dir.path(),
        "album.cue",
        b"FILE \"foo.wav\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n",
    );
    let audio = write_file(temp_dir.path(), "FOO.WAV", b"fake audio data");

    let doc = CueDocument::from_file(&sheet).unwrap();
    assert_eq!(doc.tracks[0].file, audio);

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();
    assert_eq!(library.item_count(), 1);
    assert_eq!(library.items()[0].file_path(), audio);
}

#[test]
fn test_windows_path_in_file_directive() {
    let temp_dir = TempDir::new().unwrap();
    let sheet = write_file(
        temp_dir.path(),
        "album.cue",
        b"FILE \"C:\\Rips\\Album\\album.flac\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n",
    );
    let audio = write_file(temp_dir.path(), "album.flac", b"fake audio data");

    let doc = CueDocument::from_file(&sheet).unwrap();
    assert_eq!(doc.tracks[0].file, audio);
}

#[test]
fn test_broken_sheet_does_not_stop_scan() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "good/album.cue", ALBUM_SHEET.as_bytes());
    write_file(temp_dir.path(), "good/album.flac", b"fake audio data");
    let broken = write_file(
        temp_dir.path(),
        "bad/broken.cue",
        b"PERFORMER \"Nobody\"\nTITLE \"Nothing\"\n",
    );
    let mangled = write_file(
        temp_dir.path(),
        "bad/mangled.cue",
        b"FILE \"x.flac\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:xx:00\n",
    );

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();

    assert_eq!(library.item_count(), 3);
    assert_eq!(library.sheet_count(), 1);
    assert_eq!(library.failed_sheets(), &[broken, mangled]);
}

#[test]
fn test_missing_media_file_yields_no_items() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "album.cue", ALBUM_SHEET.as_bytes());

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();

    assert_eq!(library.sheet_count(), 1);
    assert_eq!(library.item_count(), 0);
}

#[test]
fn test_one_file_per_track_prefers_complete_tags() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "album.cue",
        br#"PERFORMER "Sheet Artist"
TITLE "Sheet Album"
FILE "01.flac" WAVE
  TRACK 01 AUDIO
    TITLE "Sheet One"
    INDEX 01 00:00:00
FILE "02.flac" WAVE
  TRACK 02 AUDIO
    TITLE "Sheet Two"
    INDEX 01 00:00:00
"#,
    );
    let one = write_file(temp_dir.path(), "01.flac", b"fake audio data");
    let two = write_file(temp_dir.path(), "02.flac", b"fake audio data");

    // Second file has an incomplete tag
    let reader = FakeReader::default()
        .with_tag(one.clone(), complete_tag("Tag One"))
        .with_tag(
            two.clone(),
            AudioTag {
                loaded: true,
                artist: "Tag Artist".to_string(),
                duration_ms: 90_000,
                ..Default::default()
            },
        );

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, reader).scan().unwrap();
    assert_eq!(library.item_count(), 2);

    let first = &library.items()[0];
    assert_eq!(first.file_path(), one);
    assert_eq!(first.source(), MetadataSource::Tag);
    assert_eq!(first.title(), "Tag One");
    assert_eq!(first.album(), "Tag Album");
    assert_eq!(first.track().duration_secs, 200);

    let second = &library.items()[1];
    assert_eq!(second.file_path(), two);
    assert_eq!(second.source(), MetadataSource::Sheet);
    assert_eq!(second.title(), "Sheet Two");
    assert_eq!(second.artist(), "Sheet Artist");
    assert_eq!(second.track().duration_secs, 90);
}

#[test]
fn test_embedded_sheet_is_retargeted_to_audio_file() {
    let temp_dir = TempDir::new().unwrap();
    let audio = write_file(temp_dir.path(), "image.flac", b"fake audio data");

    let tag = AudioTag {
        cue_sheet: Some(
            "FILE \"CDImage.wav\" WAVE\n  TRACK 01 AUDIO\n    TITLE \"Intro\"\n    INDEX 01 00:00:00\n  TRACK 02 AUDIO\n    TITLE \"Outro\"\n    INDEX 01 01:00:00\n"
                .to_string(),
        ),
        ..complete_tag("Whole Image")
    };
    let reader = FakeReader::default().with_tag(audio.clone(), tag);

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, reader).scan().unwrap();

    assert_eq!(library.sheets(), &[audio.clone()]);
    assert_eq!(library.item_count(), 2);
    for item in library.items() {
        assert_eq!(item.file_path(), audio);
        // Several tracks share one file: the sheet stays primary
        assert_eq!(item.source(), MetadataSource::Sheet);
        assert_eq!(item.track().album, "Tag Album");
        assert_eq!(item.track().artist_desc, "Tag Artist");
        assert!(item.track().cue_sheet.is_some());
    }

    assert_eq!(library.items()[0].track().duration_secs, 60);
    // 200 s stream, second track starts at 60 s
    assert_eq!(library.items()[1].track().duration_secs, 140);
}

#[test]
fn test_embedded_sheets_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let audio = write_file(temp_dir.path(), "image.flac", b"fake audio data");
    let tag = AudioTag {
        cue_sheet: Some("FILE \"a.wav\" WAVE\n TRACK 01 AUDIO\n INDEX 01 00:00:00\n".to_string()),
        ..complete_tag("Whole Image")
    };
    let reader = FakeReader::default().with_tag(audio, tag);

    let config = ScanConfig::new(temp_dir.path().to_path_buf()).with_embedded_sheets(false);
    let library = ScanPipeline::new(config, reader).scan().unwrap();
    assert_eq!(library.item_count(), 0);
    assert_eq!(library.sheet_count(), 0);
}

#[test]
fn test_file_covered_by_sidecar_is_not_expanded_twice() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "album.cue", ALBUM_SHEET.as_bytes());
    let audio = write_file(temp_dir.path(), "album.flac", b"fake audio data");

    let tag = AudioTag {
        cue_sheet: Some(ALBUM_SHEET.to_string()),
        ..complete_tag("Whole Album")
    };
    let reader = FakeReader::default().with_tag(audio, tag);

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, reader).scan().unwrap();
    assert_eq!(library.sheet_count(), 1);
    assert_eq!(library.item_count(), 3);
}

#[test]
fn test_non_recursive_scan_skips_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "nested/album.cue", ALBUM_SHEET.as_bytes());
    write_file(temp_dir.path(), "nested/album.flac", b"fake audio data");

    let config = ScanConfig::new(temp_dir.path().to_path_buf()).with_recursive(false);
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();
    assert_eq!(library.sheet_count(), 0);

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();
    assert_eq!(library.sheet_count(), 1);
}

#[test]
fn test_single_sheet_as_root() {
    let temp_dir = TempDir::new().unwrap();
    let sheet = write_file(temp_dir.path(), "album.cue", ALBUM_SHEET.as_bytes());
    write_file(temp_dir.path(), "album.flac", b"fake audio data");

    let library = ScanPipeline::new(ScanConfig::new(sheet), NoTagReader)
        .scan()
        .unwrap();
    assert_eq!(library.item_count(), 3);
}

#[test]
fn test_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScanConfig::new(temp_dir.path().join("does-not-exist"));
    assert!(ScanPipeline::new(config, NoTagReader).scan().is_err());
}

#[test]
fn test_legacy_encoded_sheet() {
    let temp_dir = TempDir::new().unwrap();
    // "Mylène Farmer" / "Désobéissance" in Windows-1252
    let mut sheet = b"PERFORMER \"Myl\xE8ne Farmer\"\nTITLE \"D\xE9sob\xE9issance\"\n".to_vec();
    sheet.extend_from_slice(b"FILE \"album.flac\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n");
    write_file(temp_dir.path(), "album.cue", &sheet);
    write_file(temp_dir.path(), "album.flac", b"fake audio data");

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();
    let track = library.items()[0].track();
    assert_eq!(track.artist_desc, "Mylène Farmer");
    assert_eq!(track.album, "Désobéissance");
}

#[test]
fn test_multiple_files_and_disc_numbers() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "disc2.cue",
        br#"REM DISCNUMBER 2
PERFORMER "Various"
FILE "side-a.flac" WAVE
  TRACK 01 AUDIO
    PERFORMER "First"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    INDEX 01 02:30:00
FILE "side-b.flac" WAVE
  TRACK 03 AUDIO
    INDEX 01 00:00:00
"#,
    );
    let side_a = write_file(temp_dir.path(), "side-a.flac", b"fake audio data");
    let side_b = write_file(temp_dir.path(), "side-b.flac", b"fake audio data");

    let config = ScanConfig::new(temp_dir.path().to_path_buf());
    let library = ScanPipeline::new(config, NoTagReader).scan().unwrap();
    assert_eq!(library.item_count(), 3);

    let on_a: Vec<_> = library.items_for_file(&side_a).collect();
    assert_eq!(on_a.len(), 2);
    assert_eq!(on_a[0].track().artist_desc, "First");
    assert_eq!(on_a[1].track().artist_desc, "Various");
    assert_eq!(on_a[0].track().end_offset_ms, 150_000);
    // Last track of a file runs to its end
    assert_eq!(on_a[1].track().end_offset_ms, 0);

    let on_b: Vec<_> = library.items_for_file(&side_b).collect();
    assert_eq!(on_b.len(), 1);
    assert_eq!(on_b[0].track().disc_number(), 2);
    assert_eq!(on_b[0].track().track_in_disc(), 3);
}
