//! Filename classification and chronological sequencing.
//!
//! Decides which files carry a recognized camera/export name and assigns them
//! `YYYYMMDD-<n><suffix>` names in capture-time order.

/// Recognized filename conventions and the canonical name shape
pub mod patterns;

/// Per-entry rename decision
pub mod classify;

/// Sorting, counters and collision-free renaming
pub mod sequence;

pub use classify::{RenameDecision, classify_entry};
pub use patterns::{DEST_PATTERN, RENAME_PATTERNS, parse_filename_date};
pub use sequence::{rename_file, rename_files};
