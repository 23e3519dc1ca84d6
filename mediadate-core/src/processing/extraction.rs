// ============================================================================
// mediadate-core/src/processing/extraction.rs
// ============================================================================
//
// TIMESTAMP EXTRACTION: Best-Known Capture Time for One File
//
// Picks the strategy from the file's media kind and walks it from the most
// to the least trustworthy source. Every metadata failure degrades to the
// next source; the extractor itself never fails.
//
// KEY COMPONENTS:
// - TimestampExtractor: per-run extractor over an injected MetadataSource
// - parse_exif_datetime / parse_probe_timestamp: raw value parsing to UTC
//
// AI-ASSISTANT-INFO: Capture timestamp extraction with ordered fallbacks

use crate::catalog::TimestampSource;
use crate::discovery::MediaKind;
use crate::error::ImageTagError;
use crate::external::{CaptureTagKind, MetadataSource, PropertyStoreCapability};
use crate::logging::LogSink;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// EXIF date layout, `2023:10:15 12:00:00`.
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Naive ISO layouts accepted from the container probe when no offset is given.
const NAIVE_ISO_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Extracts capture timestamps using one metadata source for a whole run.
pub struct TimestampExtractor<'a, M: MetadataSource + ?Sized> {
    source: &'a M,
    property_store: PropertyStoreCapability,
    log: &'a dyn LogSink,
}

impl<'a, M: MetadataSource + ?Sized> TimestampExtractor<'a, M> {
    pub fn new(source: &'a M, property_store: PropertyStoreCapability, log: &'a dyn LogSink) -> Self {
        Self {
            source,
            property_store,
            log,
        }
    }

    /// Returns the best-known capture time of `path` and where it came from.
    pub fn extract(&self, path: &Path) -> (DateTime<Utc>, TimestampSource) {
        match MediaKind::from_path(path) {
            MediaKind::Image => self.extract_image(path),
            MediaKind::Video => self.extract_video(path),
            MediaKind::Other => self.extract_other(path),
        }
    }

    fn extract_image(&self, path: &Path) -> (DateTime<Utc>, TimestampSource) {
        let name = display_name(path);
        match self.source.read_image_capture_tag(path) {
            Ok(Some(tag)) => match parse_exif_datetime(&tag.raw) {
                Some(ts) => {
                    let source = match tag.kind {
                        CaptureTagKind::DateTimeOriginal => TimestampSource::ExifOriginal,
                        CaptureTagKind::DateTime => TimestampSource::ExifDateTime,
                    };
                    self.log
                        .debug(format_args!("{}: {} from {}", name, ts.to_rfc3339(), source));
                    return (ts, source);
                }
                None => self.log.warn(format_args!(
                    "Invalid EXIF date '{}' in {}, using file time",
                    tag.raw, name
                )),
            },
            Ok(None) => self
                .log
                .debug(format_args!("No EXIF capture date in {}, using file time", name)),
            Err(ImageTagError::Decode(reason)) => {
                self.log.warn(format_args!(
                    "Cannot read image data of {}: {}, using file time",
                    name, reason
                ));
                self.log_decode_diagnostics(path);
            }
            Err(e) => self
                .log
                .warn(format_args!("Error reading EXIF from {}: {}", name, e)),
        }
        self.fallback_mtime(path)
    }

    fn extract_video(&self, path: &Path) -> (DateTime<Utc>, TimestampSource) {
        let name = display_name(path);

        if self.property_store.is_available() {
            match self.source.read_video_property_store(path) {
                Ok(Some(ts)) => return (ts, TimestampSource::VideoPropertyStore),
                Ok(None) => self
                    .log
                    .debug(format_args!("No property store date for {}", name)),
                Err(e) => self
                    .log
                    .debug(format_args!("Property store lookup failed for {}: {}", name, e)),
            }
        }

        match self.source.probe_container_creation_time(path) {
            Ok(Some(raw)) => match parse_probe_timestamp(&raw) {
                Some(ts) => return (ts, TimestampSource::VideoProbe),
                None => self.log.warn(format_args!(
                    "Unrecognized creation_time '{}' in {}, using file time",
                    raw, name
                )),
            },
            Ok(None) => self
                .log
                .debug(format_args!("No creation_time tag in {}, using file time", name)),
            Err(e) => self
                .log
                .warn(format_args!("ffprobe failed for {}: {}, using file time", name, e)),
        }

        self.fallback_mtime(path)
    }

    fn extract_other(&self, path: &Path) -> (DateTime<Utc>, TimestampSource) {
        match self.source.birth_time(path) {
            Ok(t) => (DateTime::<Utc>::from(t), TimestampSource::BirthTime),
            Err(_) => self.fallback_mtime(path),
        }
    }

    fn fallback_mtime(&self, path: &Path) -> (DateTime<Utc>, TimestampSource) {
        let time = match self.source.modified_time(path) {
            Ok(t) => t,
            Err(e) => {
                self.log.error(format_args!(
                    "Cannot read modification time of {}: {}, using the Unix epoch",
                    display_name(path),
                    e
                ));
                UNIX_EPOCH
            }
        };
        (system_time_to_utc(time), TimestampSource::FallbackMtime)
    }

    fn log_decode_diagnostics(&self, path: &Path) {
        let size = self
            .source
            .file_size(path)
            .map(|s| s.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        self.log.debug(format_args!(
            "{}: size {} bytes, guessed type {}",
            display_name(path),
            size,
            mime
        ));
    }
}

/// Parses an EXIF `YYYY:MM:DD HH:MM:SS` value, reading the wall time as UTC.
pub fn parse_exif_datetime(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parses a container `creation_time` value into UTC.
///
/// A trailing `Z` is read as `+00:00`; values without an offset are taken as UTC.
pub fn parse_probe_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let normalized = raw.trim().replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn system_time_to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
