// ============================================================================
// mediadate-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL COLLABORATORS: Metadata Readers, Converters and Trash
//
// This module encapsulates every interaction with things outside the core
// algorithms: the EXIF reader, the platform property store, ffprobe, the
// ImageMagick and ffmpeg converters, and the recoverable-delete store. The
// core consumes them only through the traits below, so tests can substitute
// scripted implementations.
//
// KEY COMPONENTS:
// - MetadataSource: capture-time reads used by the timestamp extractor
// - MediaConverter: legacy image/video conversion
// - Trash: recoverable deletion of converted originals
// - SystemMetadataSource, ExternalConverter, SystemTrash: default implementations
// - Dependency checking and platform detection
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions

// ---- Internal crate imports ----
use crate::error::{
    ConversionError, CoreResult, ImageTagError, ProbeError, PropertyStoreError, TrashError,
    command_start_error,
};

// ---- External crate imports ----
use chrono::{DateTime, Utc};

// ---- Standard library imports ----
use std::env;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::SystemTime;

// ============================================================================
// SUBMODULES
// ============================================================================

/// EXIF capture tag reading via kamadak-exif
pub mod exif_reader;

/// Video conversion through ffmpeg-sidecar
pub mod ffmpeg_executor;

/// Container creation_time probing through ffprobe
pub mod ffprobe_executor;

/// Image conversion through ImageMagick
pub mod magick_executor;

/// Platform property store (Spotlight metadata on macOS)
pub mod property_store;

/// Recoverable deletion through the system trash
pub mod recycle_bin;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use exif_reader::read_image_capture_tag;
pub use ffmpeg_executor::{convert_legacy_video, video_conversion_args};
pub use ffprobe_executor::probe_container_creation_time;
pub use magick_executor::{convert_legacy_image, image_conversion_args};
pub use property_store::{PropertyStoreCapability, read_video_property_store};
pub use recycle_bin::SystemTrash;

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// Which EXIF field a capture tag was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTagKind {
    DateTimeOriginal,
    DateTime,
}

/// Raw capture time text as stored in the image, with the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTag {
    /// Unparsed value, normally `YYYY:MM:DD HH:MM:SS`
    pub raw: String,
    pub kind: CaptureTagKind,
}

/// Source of capture-time metadata for the timestamp extractor.
///
/// Each read reports an explicit `Option` for "no such value" and a named
/// error for everything else; the extractor decides how to degrade. The
/// filesystem time methods default to `std::fs` and rarely need overriding.
pub trait MetadataSource: Send + Sync {
    /// Reads `DateTimeOriginal`, else `DateTime`, from an image.
    fn read_image_capture_tag(&self, path: &Path) -> Result<Option<CaptureTag>, ImageTagError>;

    /// Queries the platform property store for a video's encoded date.
    fn read_video_property_store(
        &self,
        path: &Path,
    ) -> Result<Option<DateTime<Utc>>, PropertyStoreError>;

    /// Returns the container's `format.tags.creation_time`, unparsed.
    fn probe_container_creation_time(&self, path: &Path) -> Result<Option<String>, ProbeError>;

    fn modified_time(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    /// Fails with `Unsupported` where the platform does not record birth time.
    fn birth_time(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.created()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}

/// Converts legacy containers to their portable equivalents.
///
/// A returned `Ok` only means the tool reported success; the conversion
/// stage verifies the output itself.
pub trait MediaConverter {
    /// `.heic` to `.jpg`
    fn convert_legacy_image(&self, src: &Path, dst: &Path) -> Result<(), ConversionError>;

    /// `.mov` to `.mp4`
    fn convert_legacy_video(&self, src: &Path, dst: &Path) -> Result<(), ConversionError>;

    /// Command line reported in dry-run mode for an image conversion.
    fn describe_image_conversion(&self, src: &Path, dst: &Path) -> String {
        format!("magick {}", image_conversion_args(src, dst).join(" "))
    }

    /// Command line reported in dry-run mode for a video conversion.
    fn describe_video_conversion(&self, src: &Path, dst: &Path) -> String {
        format!("ffmpeg {}", video_conversion_args(src, dst).join(" "))
    }
}

/// Reversible delete for originals replaced by a conversion.
pub trait Trash {
    fn move_to_trash(&self, path: &Path) -> Result<(), TrashError>;
}

// ============================================================================
// DEFAULT IMPLEMENTATIONS
// ============================================================================

/// Reads metadata with kamadak-exif, ffprobe and the platform property store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetadataSource;

impl MetadataSource for SystemMetadataSource {
    fn read_image_capture_tag(&self, path: &Path) -> Result<Option<CaptureTag>, ImageTagError> {
        read_image_capture_tag(path)
    }

    fn read_video_property_store(
        &self,
        path: &Path,
    ) -> Result<Option<DateTime<Utc>>, PropertyStoreError> {
        read_video_property_store(path)
    }

    fn probe_container_creation_time(&self, path: &Path) -> Result<Option<String>, ProbeError> {
        probe_container_creation_time(path)
    }
}

/// Converts with the `magick` and `ffmpeg` binaries found on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalConverter;

impl MediaConverter for ExternalConverter {
    fn convert_legacy_image(&self, src: &Path, dst: &Path) -> Result<(), ConversionError> {
        convert_legacy_image(src, dst)
    }

    fn convert_legacy_video(&self, src: &Path, dst: &Path) -> Result<(), ConversionError> {
        convert_legacy_video(src, dst)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and only looks at whether it could be
/// started.
///
/// # Returns
///
/// * `Ok(())` - The command was found
/// * `Err(CoreError::DependencyNotFound)` - The command is not on PATH
/// * `Err(CoreError::CommandStart)` - The command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|_| ())
        .map_err(|e| command_start_error(cmd_name, e))
}

/// Tools needed to convert legacy formats in commit mode.
pub const CONVERSION_TOOLS: &[&str] = &["magick", "ffmpeg"];

// ============================================================================
// PLATFORM DETECTION
// ============================================================================

/// Checks if the current platform is macOS.
///
/// # Examples
///
/// ```rust
/// use mediadate_core::external::is_macos;
///
/// if is_macos() {
///     println!("Spotlight metadata is available");
/// }
/// ```
pub fn is_macos() -> bool {
    env::consts::OS == "macos"
}
