//! EXIF capture tag reading.
//!
//! Reads the two candidate capture-time fields from an image container with
//! kamadak-exif. The raw text is returned unparsed; interpreting it belongs
//! to the timestamp extractor.

use super::{CaptureTag, CaptureTagKind};
use crate::error::ImageTagError;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIF tags to try, in priority order.
const CAPTURE_TAGS: &[(Tag, CaptureTagKind)] = &[
    (Tag::DateTimeOriginal, CaptureTagKind::DateTimeOriginal),
    (Tag::DateTime, CaptureTagKind::DateTime),
];

/// Reads `DateTimeOriginal`, else `DateTime`, from the primary image.
///
/// # Returns
///
/// * `Ok(Some(tag))` - One of the fields carries a value
/// * `Ok(None)` - The image decodes but has no EXIF block or neither field
/// * `Err(ImageTagError::Decode)` - The file is not a recognizable image container
/// * `Err(ImageTagError::Io)` - The file could not be read
pub fn read_image_capture_tag(path: &Path) -> Result<Option<CaptureTag>, ImageTagError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(exif::Error::Io(err)) => return Err(ImageTagError::Io(err)),
        Err(err) => return Err(ImageTagError::Decode(err.to_string())),
    };

    for (tag, kind) in CAPTURE_TAGS {
        let Some(field) = exif.get_field(*tag, In::PRIMARY) else {
            continue;
        };
        if let Some(raw) = first_ascii(&field.value) {
            return Ok(Some(CaptureTag { raw, kind: *kind }));
        }
    }

    Ok(None)
}

/// Returns the first ASCII component of an EXIF value, without NUL padding.
fn first_ascii(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(components) => components
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_matches(char::from(0)).trim().to_string())
            .filter(|text| !text.is_empty()),
        _ => None,
    }
}
