//! Platform property store access for video capture dates.
//!
//! On macOS the Spotlight metadata store is queried through `mdls` for the
//! content creation date. Other platforms have no supported store; the
//! capability flag is resolved once at startup and the extractor consults
//! the store only when it is available.

use super::is_macos;
use crate::error::PropertyStoreError;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::process::Command;

/// Spotlight attribute holding the media's encoded/creation date.
const CREATION_DATE_ATTRIBUTE: &str = "kMDItemContentCreationDate";

/// Value `mdls -raw` prints for an attribute the item does not have.
const MISSING_VALUE: &str = "(null)";

/// Whether the platform property store can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyStoreCapability {
    Available,
    Unavailable,
}

impl PropertyStoreCapability {
    /// Resolves the capability for the running platform.
    pub fn detect() -> Self {
        if is_macos() {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

/// Reads the media creation date from the platform property store.
pub fn read_video_property_store(
    path: &Path,
) -> Result<Option<DateTime<Utc>>, PropertyStoreError> {
    if !is_macos() {
        return Err(PropertyStoreError::Unsupported);
    }

    // Spotlight resolves items by absolute path.
    let resolved = path
        .canonicalize()
        .map_err(|e| PropertyStoreError::Query(e.to_string()))?;

    let output = Command::new("mdls")
        .args(["-raw", "-name", CREATION_DATE_ATTRIBUTE])
        .arg(&resolved)
        .output()
        .map_err(|e| PropertyStoreError::Query(format!("failed to start mdls: {e}")))?;

    if !output.status.success() {
        return Err(PropertyStoreError::Query(format!(
            "mdls exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    parse_property_value(&String::from_utf8_lossy(&output.stdout))
}

/// Interprets an `mdls -raw` date value such as `2023-10-15 12:00:00 +0000`.
pub fn parse_property_value(raw: &str) -> Result<Option<DateTime<Utc>>, PropertyStoreError> {
    let value = raw.trim();
    if value.is_empty() || value == MISSING_VALUE {
        return Ok(None);
    }

    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z")
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| PropertyStoreError::NotATimestamp(value.to_string()))
}
