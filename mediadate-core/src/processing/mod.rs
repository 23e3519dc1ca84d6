//! Pipeline stages and orchestration.
//!
//! Each stage takes the catalog by `&mut` in a fixed order: collection,
//! conversion, then renaming (in [`crate::naming`]).

/// Capture timestamp extraction with ordered fallbacks
pub mod extraction;

/// Parallel metadata collection
pub mod collector;

/// Legacy format conversion
pub mod conversion;

/// Run orchestration
pub mod pipeline;

pub use collector::collect_metadata;
pub use conversion::{ConversionCounts, LegacyFormat, convert_file, convert_files};
pub use extraction::{TimestampExtractor, parse_exif_datetime, parse_probe_timestamp};
pub use pipeline::{BatchOutcome, process_folder};
