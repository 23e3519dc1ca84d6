//! Configuration structures and constants for the mediadate-core library.
//!
//! This module provides the run configuration threaded through every stage:
//! target folder, dry-run/commit mode, the conversion switch, the extraction
//! pool width and the property-store capability resolved at startup.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};
use crate::external::PropertyStoreCapability;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default width of the metadata extraction worker pool.
pub const DEFAULT_WORKER_COUNT: usize = 8;

/// Converted videos at or below this size are rejected as failed conversions,
/// even when the converter reported success.
pub const MIN_VIDEO_OUTPUT_BYTES: u64 = 100_000;

/// Main configuration structure for the mediadate-core library.
///
/// Created by the consumer of the library (e.g. mediadate-cli) and passed to
/// [`crate::process_folder`]. Only the folder has no sensible default.
///
/// # Examples
///
/// ```rust,no_run
/// use mediadate_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .folder(PathBuf::from("/path/to/photos"))
///     .commit(true)
///     .worker_count(4)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Folder whose top-level media files are converted and renamed
    pub folder: PathBuf,

    /// Apply changes to disk; when false every stage only reports what it would do
    pub commit: bool,

    /// Convert legacy formats (.heic, .mov) before renaming
    pub convert: bool,

    /// Width of the metadata extraction worker pool
    pub worker_count: usize,

    /// Whether the platform property store may be queried for video dates
    pub property_store: PropertyStoreCapability,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            commit: false,
            convert: true,
            worker_count: DEFAULT_WORKER_COUNT,
            property_store: PropertyStoreCapability::detect(),
        }
    }
}

impl CoreConfig {
    /// Creates a dry-run configuration for `folder` with all other defaults.
    pub fn new(folder: PathBuf) -> Self {
        Self {
            folder,
            ..Default::default()
        }
    }

    /// Rejects settings no run could honor.
    pub fn validate(&self) -> CoreResult<()> {
        if self.worker_count == 0 {
            return Err(CoreError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
