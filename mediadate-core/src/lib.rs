//! Core library for chronological renaming of photo and video folders.
//!
//! This crate catalogs the media files of one folder, determines each file's
//! capture time from embedded or probed metadata, converts legacy formats
//! (`.heic`, `.mov`) and renames recognized camera filenames to
//! `YYYYMMDD-<n><suffix>` in capture order.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediadate_core::config::CoreConfigBuilder;
//! use mediadate_core::external::{ExternalConverter, SystemMetadataSource, SystemTrash};
//! use mediadate_core::{LogFacade, process_folder};
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .folder(PathBuf::from("/path/to/photos"))
//!     .commit(false)
//!     .build();
//!
//! let outcome = process_folder(
//!     &config,
//!     &SystemMetadataSource,
//!     &ExternalConverter,
//!     &SystemTrash,
//!     &LogFacade,
//! ).unwrap();
//! println!("Would rename {} files", outcome.stats.rename_count);
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod logging;
pub mod naming;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use catalog::{BatchStats, CatalogEntry, SkipReason, TimestampSource};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::{find_media_files, list_directory_files};
pub use error::{CoreError, CoreResult};
pub use external::{
    MediaConverter, MetadataSource, PropertyStoreCapability, Trash, check_dependency, is_macos,
};
pub use logging::{LogFacade, LogSink};
pub use processing::{BatchOutcome, process_folder};
pub use reporting::log_summary;
pub use utils::{format_duration, format_elapsed};
