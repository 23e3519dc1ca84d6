// mediadate-core/tests/common/mod.rs
//
// Test doubles shared by the integration tests. Metadata is read from the
// first line of each file, so it follows the file through conversions and
// renames:
//
//   exif-original=2023:10:15 12:00:00   image DateTimeOriginal
//   exif-datetime=2023:10:15 12:00:00   image DateTime
//   propstore=2023-10-15T12:00:00Z      platform property store (video)
//   probe=2023-10-15T12:00:00Z          container creation_time (video)
//   corrupt                             undecodable image
//
// Anything else (including an empty file) means no metadata.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use log::Level;
use mediadate_core::error::{
    ConversionError, ImageTagError, ProbeError, PropertyStoreError, TrashError,
};
use mediadate_core::external::{CaptureTag, CaptureTagKind, MediaConverter, MetadataSource, Trash};
use mediadate_core::{BatchOutcome, CoreConfigBuilder, LogSink, PropertyStoreCapability};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size converted videos are padded to, comfortably above the plausibility floor.
const CONVERTED_VIDEO_BYTES: usize = 200_000;

// --- Metadata ---

fn first_line(path: &Path) -> String {
    fs::read(path)
        .map(|bytes| {
            String::from_utf8_lossy(&bytes)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_default()
}

/// Reads scripted metadata from file contents.
#[derive(Default)]
pub struct ContentMetadata;

impl MetadataSource for ContentMetadata {
    fn read_image_capture_tag(&self, path: &Path) -> Result<Option<CaptureTag>, ImageTagError> {
        let line = first_line(path);
        if line == "corrupt" {
            return Err(ImageTagError::Decode("cannot identify image file".into()));
        }
        let tag = if let Some(raw) = line.strip_prefix("exif-original=") {
            Some(CaptureTag {
                raw: raw.to_string(),
                kind: CaptureTagKind::DateTimeOriginal,
            })
        } else {
            line.strip_prefix("exif-datetime=").map(|raw| CaptureTag {
                raw: raw.to_string(),
                kind: CaptureTagKind::DateTime,
            })
        };
        Ok(tag)
    }

    fn read_video_property_store(
        &self,
        path: &Path,
    ) -> Result<Option<DateTime<Utc>>, PropertyStoreError> {
        let line = first_line(path);
        match line.strip_prefix("propstore=") {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| PropertyStoreError::NotATimestamp(raw.to_string())),
            None => Ok(None),
        }
    }

    fn probe_container_creation_time(&self, path: &Path) -> Result<Option<String>, ProbeError> {
        Ok(first_line(path).strip_prefix("probe=").map(str::to_string))
    }
}

// --- Conversion ---

/// Copies the source into the destination; videos are padded to a plausible size.
#[derive(Default)]
pub struct FakeConverter {
    pub fail: bool,
    pub undersized: bool,
    pub calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeConverter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn undersized() -> Self {
        Self {
            undersized: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn copy(&self, src: &Path, dst: &Path, pad_to: usize) -> Result<(), ConversionError> {
        self.calls
            .lock()
            .unwrap()
            .push((src.to_path_buf(), dst.to_path_buf()));
        if self.fail {
            return Err(ConversionError::Failed {
                tool: "fake",
                details: "scripted failure".into(),
            });
        }
        let mut content = fs::read(src).map_err(|e| ConversionError::Start {
            tool: "fake",
            reason: e.to_string(),
        })?;
        content.push(b'\n');
        if content.len() < pad_to {
            content.resize(pad_to, b'0');
        }
        fs::write(dst, content).map_err(|e| ConversionError::Failed {
            tool: "fake",
            details: e.to_string(),
        })
    }
}

impl MediaConverter for FakeConverter {
    fn convert_legacy_image(&self, src: &Path, dst: &Path) -> Result<(), ConversionError> {
        self.copy(src, dst, 0)
    }

    fn convert_legacy_video(&self, src: &Path, dst: &Path) -> Result<(), ConversionError> {
        let pad = if self.undersized { 0 } else { CONVERTED_VIDEO_BYTES };
        self.copy(src, dst, pad)
    }
}

// --- Trash ---

/// Deletes and records trashed paths, or refuses when `fail` is set.
#[derive(Default)]
pub struct RecordingTrash {
    pub fail: bool,
    pub trashed: Mutex<Vec<PathBuf>>,
}

impl RecordingTrash {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn trashed_names(&self) -> Vec<String> {
        self.trashed
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect()
    }
}

impl Trash for RecordingTrash {
    fn move_to_trash(&self, path: &Path) -> Result<(), TrashError> {
        if self.fail {
            return Err(TrashError("trash unavailable".into()));
        }
        fs::remove_file(path).map_err(|e| TrashError(e.to_string()))?;
        self.trashed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

// --- Logging ---

#[derive(Default)]
pub struct RecordingLog {
    pub records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLog {
    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(_, msg)| msg.contains(needle))
    }

    pub fn has_level(&self, level: Level) -> bool {
        self.records.lock().unwrap().iter().any(|(l, _)| *l == level)
    }
}

impl LogSink for RecordingLog {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.records.lock().unwrap().push((level, args.to_string()));
    }
}

// --- Fixtures ---

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Sorted names of the regular files in `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Runs one pass with the content-backed doubles.
pub fn run_pass(
    dir: &Path,
    commit: bool,
    converter: &FakeConverter,
    trash: &RecordingTrash,
    log: &RecordingLog,
) -> BatchOutcome {
    let config = CoreConfigBuilder::new()
        .folder(dir.to_path_buf())
        .commit(commit)
        .worker_count(2)
        .property_store(PropertyStoreCapability::Unavailable)
        .build();
    mediadate_core::process_folder(&config, &ContentMetadata, converter, trash, log)
        .expect("pass over a valid folder must succeed")
}
