//! ImageMagick integration for legacy image conversion.

use crate::error::ConversionError;
use std::path::Path;
use std::process::Command;

const MAGICK: &str = "magick";

/// Arguments for converting `src` to `dst` while keeping the EXIF block.
pub fn image_conversion_args(src: &Path, dst: &Path) -> Vec<String> {
    vec![
        src.to_string_lossy().into_owned(),
        "-define".to_string(),
        "heic:preserve-exif=true".to_string(),
        dst.to_string_lossy().into_owned(),
    ]
}

/// Converts a `.heic` image to `.jpg` with ImageMagick.
pub fn convert_legacy_image(src: &Path, dst: &Path) -> Result<(), ConversionError> {
    let output = Command::new(MAGICK)
        .args(image_conversion_args(src, dst))
        .output()
        .map_err(|e| ConversionError::Start {
            tool: MAGICK,
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ConversionError::Failed {
            tool: MAGICK,
            details: format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_conversion_args_order() {
        let args = image_conversion_args(Path::new("/p/IMG_1.heic"), Path::new("/p/IMG_1.jpg"));
        assert_eq!(
            args,
            vec!["/p/IMG_1.heic", "-define", "heic:preserve-exif=true", "/p/IMG_1.jpg"]
        );
    }
}
