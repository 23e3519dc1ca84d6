// ============================================================================
// mediadate-core/src/catalog.rs
// ============================================================================
//
// CATALOG: In-Memory Records for One Batch Run
//
// A CatalogEntry is created per eligible file by the collector, mutated by
// the converter (path, extension, was_converted) and by the sequencer
// (skip_reason), then dropped at the end of the run. BatchStats holds the
// aggregate counters the orchestrator builds once per run.
//
// AI-ASSISTANT-INFO: Catalog entry and batch statistics types

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::normalized_extension;

// ============================================================================
// TIMESTAMP SOURCE
// ============================================================================

/// Which extraction strategy produced an entry's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampSource {
    /// EXIF `DateTimeOriginal`
    ExifOriginal,
    /// EXIF `DateTime`
    ExifDateTime,
    /// Platform property store (media encoded date)
    VideoPropertyStore,
    /// Container `creation_time` tag reported by ffprobe
    VideoProbe,
    /// Filesystem birth time
    BirthTime,
    /// Filesystem modification time
    FallbackMtime,
}

impl TimestampSource {
    /// Filesystem heuristics are unreliable; embedded or probed metadata is not.
    pub fn is_reliable(self) -> bool {
        !matches!(self, Self::BirthTime | Self::FallbackMtime)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExifOriginal => "exif-original",
            Self::ExifDateTime => "exif-datetime",
            Self::VideoPropertyStore => "video-propstore",
            Self::VideoProbe => "video-probe",
            Self::BirthTime => "birthtime",
            Self::FallbackMtime => "fallback-mtime",
        }
    }
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SKIP REASON
// ============================================================================

/// Why an entry was excluded from renaming. Used for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipReason {
    #[default]
    None,
    /// The filename matches no recognized naming convention.
    NoPatternMatch,
    /// The filename already has the canonical shape and agrees with the metadata.
    AlreadyRenamed,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoPatternMatch => "no-pattern-match",
            Self::AlreadyRenamed => "already-renamed",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CATALOG ENTRY
// ============================================================================

/// Everything known about one eligible media file during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Current on-disk location.
    pub path: PathBuf,
    /// Best-known capture time, always UTC.
    pub timestamp: DateTime<Utc>,
    /// Lower-cased extension including the leading dot.
    pub extension: String,
    /// False when the timestamp came from a filesystem heuristic.
    pub metadata_reliable: bool,
    pub timestamp_source: TimestampSource,
    pub was_converted: bool,
    original_name: String,
    skip_reason: SkipReason,
}

impl CatalogEntry {
    pub fn new(path: PathBuf, timestamp: DateTime<Utc>, source: TimestampSource) -> Self {
        let original_name = file_name_of(&path);
        let extension = normalized_extension(&path).unwrap_or_default();
        Self {
            path,
            timestamp,
            extension,
            metadata_reliable: source.is_reliable(),
            timestamp_source: source,
            was_converted: false,
            original_name,
            skip_reason: SkipReason::None,
        }
    }

    /// Filename as first observed by the collector.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Filename of the current on-disk location.
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }

    pub fn skip_reason(&self) -> SkipReason {
        self.skip_reason
    }

    /// Records why the entry was excluded from renaming.
    ///
    /// A reason can be set once; later attempts are refused and return `false`.
    pub fn set_skip_reason(&mut self, reason: SkipReason) -> bool {
        if self.skip_reason != SkipReason::None || reason == SkipReason::None {
            return false;
        }
        self.skip_reason = reason;
        true
    }

    /// Points the entry at its converted replacement.
    pub fn mark_converted(&mut self, converted_path: PathBuf, extension: &str) {
        self.path = converted_path;
        self.extension = extension.to_string();
        self.was_converted = true;
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ============================================================================
// BATCH STATISTICS
// ============================================================================

/// Aggregate counters for one run, built by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// `.heic` files converted to `.jpg`
    pub image_conversions: usize,
    /// `.mov` files converted to `.mp4`
    pub video_conversions: usize,
    pub rename_count: usize,
    pub commit: bool,
    /// False when conversion was disabled for the run.
    pub conversion_enabled: bool,
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn total_conversions(&self) -> usize {
        self.image_conversions + self.video_conversions
    }
}
