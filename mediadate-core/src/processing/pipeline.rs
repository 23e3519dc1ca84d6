// ============================================================================
// mediadate-core/src/processing/pipeline.rs
// ============================================================================
//
// PIPELINE ORCHESTRATOR: One Pass Over a Folder
//
// Validates the folder, then runs discovery, metadata collection, legacy
// conversion and sequenced renaming in that order, timing the whole pass.
// An invalid folder or configuration is the only failure raised before any
// work starts; per-file problems are logged by the stages and never abort
// the run.
//
// KEY COMPONENTS:
// - process_folder: run entry point
// - BatchOutcome: statistics plus the final catalog
//
// AI-ASSISTANT-INFO: Top-level processing pipeline

use crate::catalog::{BatchStats, CatalogEntry};
use crate::config::CoreConfig;
use crate::discovery::find_media_files;
use crate::error::{CoreError, CoreResult};
use crate::external::{MediaConverter, MetadataSource, Trash};
use crate::logging::LogSink;
use crate::naming::rename_files;
use crate::processing::collector::collect_metadata;
use crate::processing::conversion::{ConversionCounts, convert_files, log_conversion_disabled};
use crate::reporting::log_summary;

use std::time::Instant;

/// Result of a completed pass.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub stats: BatchStats,
    /// Entries in the order the sequencer processed them.
    pub catalog: Vec<CatalogEntry>,
}

/// Processes `config.folder`: catalog, convert, rename, then log a summary.
///
/// # Arguments
///
/// * `config` - Folder, commit/convert switches and worker pool width
/// * `source` - Capture-time metadata reads
/// * `converter` - Legacy format conversion
/// * `trash` - Recoverable deletion of converted originals
/// * `log` - Destination for progress and the summary
///
/// # Returns
///
/// * `Err(CoreError::InvalidFolder)` - The folder is not an existing directory
/// * `Err(CoreError::Config)` - The configuration is invalid
/// * `Ok(BatchOutcome)` - The pass completed, whatever happened to individual files
pub fn process_folder<M, C, T>(
    config: &CoreConfig,
    source: &M,
    converter: &C,
    trash: &T,
    log: &dyn LogSink,
) -> CoreResult<BatchOutcome>
where
    M: MetadataSource + ?Sized,
    C: MediaConverter + ?Sized,
    T: Trash + ?Sized,
{
    let start = Instant::now();

    if !config.folder.is_dir() {
        return Err(CoreError::InvalidFolder(config.folder.display().to_string()));
    }
    config.validate()?;

    log.info(format_args!("Processing folder: {}", config.folder.display()));
    if !config.commit {
        log.info(format_args!("Dry run: no files will be changed"));
    }

    // ========================================================================
    // STEP 1: DISCOVERY AND METADATA
    // ========================================================================

    let files = find_media_files(&config.folder)?;
    log.debug(format_args!("Found {} media files", files.len()));

    let mut catalog = collect_metadata(&files, source, config, log)?;

    // ========================================================================
    // STEP 2: LEGACY FORMAT CONVERSION
    // ========================================================================

    let counts = if config.convert {
        convert_files(&mut catalog, converter, trash, config.commit, log)
    } else {
        log_conversion_disabled(log);
        ConversionCounts::default()
    };

    // ========================================================================
    // STEP 3: RENAMING
    // ========================================================================

    let rename_count = rename_files(&mut catalog, &config.folder, config.commit, log)?;

    let stats = BatchStats {
        image_conversions: counts.images,
        video_conversions: counts.videos,
        rename_count,
        commit: config.commit,
        conversion_enabled: config.convert,
        elapsed: start.elapsed(),
    };
    log_summary(&catalog, &stats, log);

    Ok(BatchOutcome { stats, catalog })
}
