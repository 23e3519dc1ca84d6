//! Rename classification for a single catalog entry.

use crate::catalog::{CatalogEntry, SkipReason};
use crate::logging::LogSink;
use crate::naming::patterns::{DEST_PATTERN, first_match, parse_filename_date};

/// Outcome of classifying one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDecision {
    /// Leave the file alone.
    Skip(SkipReason),
    /// Rename to `<date>-<n><suffix>`; the suffix keeps the extension.
    Rename { suffix: String },
}

impl RenameDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// Decides whether an entry should be renamed and what trails the new prefix.
///
/// Files already in canonical form are only renamed when the metadata is
/// reliable and dates the capture strictly before the date in the name.
pub fn classify_entry(entry: &CatalogEntry, log: &dyn LogSink) -> RenameDecision {
    let filename = entry.file_name();

    let Some(pattern) = first_match(&filename) else {
        log.debug(format_args!("Skipping {}, no matching pattern", filename));
        return RenameDecision::Skip(SkipReason::NoPatternMatch);
    };

    if let Some(canonical) = DEST_PATTERN.find(&filename) {
        if !entry.metadata_reliable {
            log.debug(format_args!(
                "Skipping {}: metadata unavailable, trusting filename",
                filename
            ));
            return RenameDecision::Skip(SkipReason::AlreadyRenamed);
        }

        let on_or_before = parse_filename_date(&filename)
            .map(|date| date <= entry.timestamp.date_naive())
            .unwrap_or(false);
        if on_or_before {
            log.debug(format_args!(
                "Skipping {}: filename date is earlier than or matches metadata timestamp",
                filename
            ));
            return RenameDecision::Skip(SkipReason::AlreadyRenamed);
        }

        log.info(format_args!(
            "Renaming {}: filename date mismatch with actual timestamp",
            filename
        ));
        return RenameDecision::Rename {
            suffix: filename[canonical.end()..].to_string(),
        };
    }

    let suffix = match pattern.find(&filename) {
        Some(m) => filename[m.end()..].to_string(),
        None => filename.clone(),
    };
    RenameDecision::Rename { suffix }
}
