// ============================================================================
// mediadate-core/src/processing/conversion.rs
// ============================================================================
//
// LEGACY FORMAT CONVERSION: .heic to .jpg and .mov to .mp4
//
// Converts catalog entries in place before renaming. Dry-run mode reports
// the conversion and updates the entry in memory only, so rename counts match
// a committed run. Commit mode verifies the converted output before the
// original goes to the trash; a failed conversion leaves the entry as it was.
//
// KEY COMPONENTS:
// - LegacyFormat: the two convertible source formats
// - convert_files: stage entry point over the whole catalog
// - ConversionCounts: per-format success counters
//
// AI-ASSISTANT-INFO: Legacy media conversion stage

use crate::catalog::CatalogEntry;
use crate::config::MIN_VIDEO_OUTPUT_BYTES;
use crate::error::ConversionError;
use crate::external::{MediaConverter, Trash};
use crate::logging::LogSink;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ============================================================================
// TYPES
// ============================================================================

/// Source formats replaced by a portable equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyFormat {
    /// `.heic` images, converted to `.jpg`
    Heic,
    /// `.mov` videos, converted to `.mp4`
    Mov,
}

impl LegacyFormat {
    /// Matches a normalized extension (`.heic`, `.mov`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".heic" => Some(Self::Heic),
            ".mov" => Some(Self::Mov),
            _ => None,
        }
    }

    /// Extension of the converted output, with leading dot.
    pub fn target_extension(self) -> &'static str {
        match self {
            Self::Heic => ".jpg",
            Self::Mov => ".mp4",
        }
    }

    pub fn destination_for(self, src: &Path) -> PathBuf {
        src.with_extension(self.target_extension().trim_start_matches('.'))
    }
}

/// Successful conversions in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionCounts {
    pub images: usize,
    pub videos: usize,
}

impl ConversionCounts {
    fn record(&mut self, format: LegacyFormat) {
        match format {
            LegacyFormat::Heic => self.images += 1,
            LegacyFormat::Mov => self.videos += 1,
        }
    }
}

// ============================================================================
// STAGE ENTRY POINT
// ============================================================================

/// Converts every legacy-format entry, updating converted entries in place.
///
/// When another catalog entry already stands for the destination file the
/// conversion counts as done: that entry is marked converted and the legacy
/// entry leaves the catalog, so each file keeps exactly one entry. In commit
/// mode the superseded original goes to the trash like any converted one.
pub fn convert_files<C, T>(
    entries: &mut Vec<CatalogEntry>,
    converter: &C,
    trash: &T,
    commit: bool,
    log: &dyn LogSink,
) -> ConversionCounts
where
    C: MediaConverter + ?Sized,
    T: Trash + ?Sized,
{
    let mut counts = ConversionCounts::default();
    let catalogued: HashSet<PathBuf> = entries.iter().map(|e| e.path.clone()).collect();
    let mut superseded: HashSet<PathBuf> = HashSet::new();
    let mut adopted: HashSet<PathBuf> = HashSet::new();

    for entry in entries.iter_mut() {
        let Some(format) = LegacyFormat::from_extension(&entry.extension) else {
            log.debug(format_args!("No conversion needed for {}", entry.path.display()));
            continue;
        };

        let dst = format.destination_for(&entry.path);
        if catalogued.contains(&dst) {
            log.info(format_args!(
                "Skipping conversion: {} already exists",
                file_label(&dst)
            ));
            retire_original(&entry.path, trash, commit, log);
            superseded.insert(entry.path.clone());
            adopted.insert(dst);
            counts.record(format);
            continue;
        }

        if let Some(converted) = convert_file(&entry.path, format, converter, trash, commit, log) {
            entry.mark_converted(converted, format.target_extension());
            counts.record(format);
        }
    }

    if !superseded.is_empty() {
        entries.retain(|e| !superseded.contains(&e.path));
        for entry in entries.iter_mut().filter(|e| adopted.contains(&e.path)) {
            entry.was_converted = true;
        }
    }

    counts
}

/// Logs that conversion was disabled for the run.
pub fn log_conversion_disabled(log: &dyn LogSink) {
    log.info(format_args!(
        "Skipping legacy format conversion (--no-convert flag set)"
    ));
}

// ============================================================================
// SINGLE FILE
// ============================================================================

/// Converts one file and returns the path the entry should now point at.
///
/// `None` means the entry must stay unchanged.
pub fn convert_file<C, T>(
    src: &Path,
    format: LegacyFormat,
    converter: &C,
    trash: &T,
    commit: bool,
    log: &dyn LogSink,
) -> Option<PathBuf>
where
    C: MediaConverter + ?Sized,
    T: Trash + ?Sized,
{
    let dst = format.destination_for(src);

    if dst.exists() {
        log.info(format_args!(
            "Skipping conversion: {} already exists",
            file_label(&dst)
        ));
        return Some(dst);
    }

    let command_line = match format {
        LegacyFormat::Heic => converter.describe_image_conversion(src, &dst),
        LegacyFormat::Mov => converter.describe_video_conversion(src, &dst),
    };

    if !commit {
        log.info(format_args!(
            "Would convert {} to {}",
            file_label(src),
            file_label(&dst)
        ));
        log.info(format_args!("Would run: {}", command_line));
        return Some(dst);
    }

    log.info(format_args!(
        "Converting {} to {}",
        file_label(src),
        file_label(&dst)
    ));
    log.debug(format_args!("Running: {}", command_line));

    let result = match format {
        LegacyFormat::Heic => converter.convert_legacy_image(src, &dst),
        LegacyFormat::Mov => converter.convert_legacy_video(src, &dst),
    }
    .and_then(|()| verify_output(&dst, format));

    if let Err(e) = result {
        log.error(format_args!("Conversion failed for {}: {}", file_label(src), e));
        if matches!(e, ConversionError::UndersizedOutput { .. }) {
            discard_output(&dst, log);
        }
        return None;
    }

    log.info(format_args!(
        "Converted {} to {}",
        file_label(src),
        file_label(&dst)
    ));
    retire_original(src, trash, commit, log);

    Some(dst)
}

/// Moves a replaced original to the trash; a refusal is logged only.
fn retire_original<T>(src: &Path, trash: &T, commit: bool, log: &dyn LogSink)
where
    T: Trash + ?Sized,
{
    if !commit {
        log.info(format_args!("Would move {} to trash", file_label(src)));
        return;
    }

    match trash.move_to_trash(src) {
        Ok(()) => log.info(format_args!("Moved original {} to trash", file_label(src))),
        Err(e) => log.error(format_args!(
            "Could not move the original {} to trash: {}",
            file_label(src),
            e
        )),
    }
}

/// Checks the converter left a plausible file behind.
fn verify_output(dst: &Path, format: LegacyFormat) -> Result<(), ConversionError> {
    let metadata =
        std::fs::metadata(dst).map_err(|_| ConversionError::MissingOutput(dst.to_path_buf()))?;

    if format == LegacyFormat::Mov && metadata.len() <= MIN_VIDEO_OUTPUT_BYTES {
        return Err(ConversionError::UndersizedOutput {
            path: dst.to_path_buf(),
            size: metadata.len(),
        });
    }

    Ok(())
}

fn discard_output(dst: &Path, log: &dyn LogSink) {
    if let Err(e) = std::fs::remove_file(dst) {
        log.warn(format_args!(
            "Could not remove incomplete output {}: {}",
            file_label(dst),
            e
        ));
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
