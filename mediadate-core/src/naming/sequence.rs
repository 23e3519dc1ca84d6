// ============================================================================
// mediadate-core/src/naming/sequence.rs
// ============================================================================
//
// SEQUENCER: Chronological, Collision-Free Renaming
//
// Orders the catalog by capture time, keeps a per-date counter, and assigns
// `YYYYMMDD-<n><suffix>` names. Collisions are checked against a snapshot of
// the directory's files taken once at the start and updated as names are
// assigned. A candidate name is also taken when anything else answers to it
// on disk (a directory, or a case variant on a case-insensitive filesystem),
// unless this run already moved that file away.
//
// AI-ASSISTANT-INFO: Sequenced renaming with per-date counters

use crate::catalog::CatalogEntry;
use crate::discovery::list_directory_files;
use crate::error::CoreResult;
use crate::logging::LogSink;
use crate::naming::classify::{RenameDecision, classify_entry};

use std::collections::HashSet;
use std::path::Path;

/// Date prefix layout, taken from the UTC timestamp.
const DATE_PREFIX_FORMAT: &str = "%Y%m%d";

/// Renames every eligible entry in `folder` and returns how many were renamed.
///
/// Entries are reordered by `(timestamp, filename)`. The per-date counter
/// advances for every entry, skipped ones included, so a skipped file keeps
/// its slot in the day's sequence. In commit mode each renamed entry's path
/// is updated to the new location.
///
/// # Errors
///
/// Only fails when the directory snapshot cannot be taken; individual rename
/// failures are logged and left out of the count.
pub fn rename_files(
    entries: &mut [CatalogEntry],
    folder: &Path,
    commit: bool,
    log: &dyn LogSink,
) -> CoreResult<usize> {
    let mut existing: HashSet<String> = list_directory_files(folder)?;
    let mut vacated: HashSet<String> = HashSet::new();

    entries.sort_by_cached_key(|entry| (entry.timestamp, entry.file_name()));

    let mut rename_count = 0;
    let mut counter: usize = 0;
    let mut last_prefix: Option<String> = None;

    for entry in entries.iter_mut() {
        let prefix = entry.timestamp.format(DATE_PREFIX_FORMAT).to_string();

        if entry.was_converted {
            log.debug(format_args!(
                "Converted file {} evaluated for renaming",
                entry.file_name()
            ));
        }

        counter = if last_prefix.as_deref() == Some(prefix.as_str()) {
            counter + 1
        } else {
            0
        };
        last_prefix = Some(prefix.clone());

        let suffix = match classify_entry(entry, log) {
            RenameDecision::Skip(reason) => {
                entry.set_skip_reason(reason);
                continue;
            }
            RenameDecision::Rename { suffix } => suffix,
        };

        let mut dst_name = format!("{prefix}-{counter}{suffix}");
        while existing.contains(&dst_name)
            || (!vacated.contains(&dst_name) && occupied_on_disk(folder, &dst_name))
        {
            counter += 1;
            dst_name = format!("{prefix}-{counter}{suffix}");
        }

        let src = entry.path.clone();
        let dst = folder.join(&dst_name);
        if rename_file(&src, &dst, commit, log) {
            let src_name = entry.file_name();
            existing.remove(&src_name);
            vacated.insert(src_name);
            vacated.remove(&dst_name);
            existing.insert(dst_name);
            rename_count += 1;
            if commit {
                entry.path = dst;
            }
        }
    }

    Ok(rename_count)
}

/// Renames (or simulates renaming) one file.
///
/// Returns `true` when the rename happened or would happen. An existing
/// destination is never overwritten.
pub fn rename_file(src: &Path, dst: &Path, commit: bool, log: &dyn LogSink) -> bool {
    let src_name = name_of(src);
    let dst_name = name_of(dst);

    if src == dst {
        log.info(format_args!(
            "Skipping rename: source and destination are the same ({})",
            src_name
        ));
        return false;
    }

    log.info(format_args!("Renaming {} to {}", src_name, dst_name));

    if !commit {
        log.info(format_args!("Would rename {} to {}", src_name, dst_name));
        return true;
    }

    if dst.exists() {
        log.error(format_args!(
            "Rename failed for {}: {} already exists",
            src_name, dst_name
        ));
        return false;
    }

    match std::fs::rename(src, dst) {
        Ok(()) => {
            log.info(format_args!("Rename successful: {} -> {}", src_name, dst_name));
            true
        }
        Err(e) => {
            log.error(format_args!("Rename failed for {}: {}", src_name, e));
            false
        }
    }
}

/// True when any directory entry, of any kind, resolves to `name`.
fn occupied_on_disk(folder: &Path, name: &str) -> bool {
    folder.join(name).symlink_metadata().is_ok()
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
