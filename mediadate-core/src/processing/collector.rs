//! Parallel metadata collection.
//!
//! Builds one [`CatalogEntry`] per eligible path by running the timestamp
//! extractor on a dedicated rayon pool. Entry order is whatever the pool
//! produces; the sequencer sorts before assigning names.

use crate::catalog::CatalogEntry;
use crate::config::CoreConfig;
use crate::discovery::is_allowed_media;
use crate::error::{CoreError, CoreResult};
use crate::external::MetadataSource;
use crate::logging::LogSink;
use crate::processing::extraction::TimestampExtractor;

use rayon::prelude::*;
use std::path::PathBuf;

/// Catalogs every path with an allowed extension; other paths are dropped silently.
///
/// # Arguments
///
/// * `files` - Candidate paths, typically from [`crate::find_media_files`]
/// * `source` - Metadata reads shared by all workers
/// * `config` - Supplies the pool width and property store capability
/// * `log` - Receives per-file extraction diagnostics
///
/// # Returns
///
/// * `Err(CoreError::WorkerPool)` only when the pool cannot be created
pub fn collect_metadata<M>(
    files: &[PathBuf],
    source: &M,
    config: &CoreConfig,
    log: &dyn LogSink,
) -> CoreResult<Vec<CatalogEntry>>
where
    M: MetadataSource + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .thread_name(|i| format!("mediadate-extract-{i}"))
        .build()
        .map_err(|e| CoreError::WorkerPool(e.to_string()))?;

    let extractor = TimestampExtractor::new(source, config.property_store, log);

    let entries: Vec<CatalogEntry> = pool.install(|| {
        files
            .par_iter()
            .filter(|path| is_allowed_media(path))
            .map(|path| {
                let (timestamp, source) = extractor.extract(path);
                CatalogEntry::new(path.clone(), timestamp, source)
            })
            .collect()
    });

    log.debug(format_args!(
        "Collected metadata for {} of {} files",
        entries.len(),
        files.len()
    ));

    Ok(entries)
}
