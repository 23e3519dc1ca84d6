//! File discovery module for finding media files to process.
//!
//! This module decides which files are eligible (by lower-cased extension),
//! classifies them as image or video, and provides the plain directory
//! listing the sequencer snapshots for collision checks. Only the top level
//! of a folder is searched.

use crate::error::CoreResult;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Image extensions eligible for processing.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".heic"];

/// Video extensions eligible for processing.
pub const VIDEO_EXTENSIONS: &[&str] = &[".m4v", ".mov", ".mp4"];

/// Broad category of a media file, selecting the extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn from_path(path: &Path) -> Self {
        match normalized_extension(path) {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Self::Image,
            Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => Self::Video,
            _ => Self::Other,
        }
    }
}

/// Returns the lower-cased extension of `path` with a leading dot (`.jpg`).
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// Returns true when the extension (case-insensitive) is an allowed image or video type.
#[must_use]
pub fn is_allowed_media(path: &Path) -> bool {
    MediaKind::from_path(path) != MediaKind::Other
}

/// Finds regular files with an allowed extension in the top level of `dir`.
///
/// The returned order is the directory's order; nothing downstream relies on it.
///
/// # Examples
///
/// ```rust,no_run
/// use mediadate_core::find_media_files;
/// use std::path::Path;
///
/// let files = find_media_files(Path::new("/path/to/photos")).unwrap();
/// println!("Found {} media files", files.len());
/// ```
pub fn find_media_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(dir)?;
    let files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            is_allowed_media(&path).then_some(path)
        })
        .collect();

    Ok(files)
}

/// Lists the names of the regular files currently present in `dir`.
pub fn list_directory_files(dir: &Path) -> CoreResult<HashSet<String>> {
    let names = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            Some(entry.file_name().to_string_lossy().into_owned())
        })
        .collect();
    Ok(names)
}
