//! Filename conventions recognized for renaming.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical `YYYYMMDD-<n>` shape produced by the sequencer.
const CANONICAL: &str = r"(?i)^(\d{8})-\d+";

/// Recognized name prefixes, tried in order. Matching is case-insensitive and
/// anchored at the start of the filename.
pub static RENAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(IM_|IMG_|IMG_E|VD_)\d+",
        r"(?i)^\d+(_\d+)?",
        r"(?i)^[A-Z]{4}\d{4}",
        r"(?i)^BulkPics\s\d+",
        r"(?i)^P([A-Z]|\d)\d{6}",
        CANONICAL,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("rename pattern literal is valid"))
    .collect()
});

/// Matches a filename already in canonical form; group 1 is the date.
pub static DEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(CANONICAL).expect("canonical pattern literal is valid"));

/// Returns the first recognized pattern that matches `filename`.
pub fn first_match(filename: &str) -> Option<&'static Regex> {
    RENAME_PATTERNS.iter().find(|re| re.is_match(filename))
}

/// Reads the `YYYYMMDD` date from a canonical filename.
pub fn parse_filename_date(filename: &str) -> Option<NaiveDate> {
    let caps = DEST_PATTERN.captures(filename)?;
    NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y%m%d").ok()
}
