//! Summary reporting module
//!
//! Logs conversion, rename and skip totals once a run has finished.
//! Dry-run totals are worded as hypothetical.

use crate::catalog::{BatchStats, CatalogEntry, SkipReason};
use crate::logging::{LogSink, log_section};
use crate::utils::format_elapsed;

/// Skipped entries broken down by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub no_pattern_match: usize,
    pub already_renamed: usize,
}

impl SkipCounts {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut counts, entry| {
                match entry.skip_reason() {
                    SkipReason::NoPatternMatch => counts.no_pattern_match += 1,
                    SkipReason::AlreadyRenamed => counts.already_renamed += 1,
                    SkipReason::None => {}
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.no_pattern_match + self.already_renamed
    }
}

/// Logs the end-of-run summary.
pub fn log_summary(entries: &[CatalogEntry], stats: &BatchStats, log: &dyn LogSink) {
    log_section(log, "Summary");

    if stats.conversion_enabled {
        log.info(format_args!(
            "Converted {} files total",
            stats.total_conversions()
        ));
        log.info(format_args!("  - {} .heic files to .jpg", stats.image_conversions));
        log.info(format_args!("  - {} .mov files to .mp4", stats.video_conversions));
    }

    log.info(format_args!(
        "Evaluated {} entries for renaming",
        entries.len()
    ));
    if stats.conversion_enabled {
        let converted = entries.iter().filter(|e| e.was_converted).count();
        log.info(format_args!("  - {} were converted files", converted));
    }

    if stats.commit {
        log.info(format_args!("Renamed {} files", stats.rename_count));
    } else {
        log.info(format_args!(
            "Would rename {} files. Use --commit to apply changes.",
            stats.rename_count
        ));
    }

    let skipped = SkipCounts::from_entries(entries);
    log.info(format_args!("Skipped {} files", skipped.total()));
    log.info(format_args!("  - {} had no matching pattern", skipped.no_pattern_match));
    log.info(format_args!(
        "  - {} were already renamed with matching timestamp",
        skipped.already_renamed
    ));

    log.info(format_args!("Finished in {}", format_elapsed(stats.elapsed)));
}
