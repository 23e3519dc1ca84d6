// ============================================================================
// mediadate-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Legacy Video Conversion
//
// Spawns ffmpeg through ffmpeg-sidecar to re-encode `.mov` containers as
// H.264/AAC `.mp4`. The event stream is drained so error lines reported by
// ffmpeg end up in the returned ConversionError.
//
// AI-ASSISTANT-INFO: ffmpeg process execution for .mov to .mp4 conversion

use crate::error::ConversionError;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;

const FFMPEG: &str = "ffmpeg";

/// Arguments for re-encoding `src` into a web-compatible `dst`.
///
/// Overwrites `dst` when present (`-y`); callers only convert when the
/// destination does not exist yet.
pub fn video_conversion_args(src: &Path, dst: &Path) -> Vec<String> {
    let mut args: Vec<String> = vec!["-y".into(), "-i".into(), src.to_string_lossy().into_owned()];
    args.extend(
        [
            "-c:v", "libx264", "-preset", "fast", "-pix_fmt", "yuv420p", "-c:a", "aac",
            "-movflags", "+faststart",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    args.push(dst.to_string_lossy().into_owned());
    args
}

/// Converts a `.mov` video to `.mp4` with ffmpeg.
///
/// # Returns
///
/// * `Ok(())` - ffmpeg exited successfully
/// * `Err(ConversionError::Start)` - ffmpeg could not be spawned
/// * `Err(ConversionError::Failed)` - ffmpeg exited with an error
pub fn convert_legacy_video(src: &Path, dst: &Path) -> Result<(), ConversionError> {
    let mut cmd = FfmpegCommand::new();
    cmd.args(video_conversion_args(src, dst));

    log::debug!("Running: ffmpeg {}", video_conversion_args(src, dst).join(" "));

    let mut child = cmd.spawn().map_err(|e| ConversionError::Start {
        tool: FFMPEG,
        reason: e.to_string(),
    })?;

    let mut error_lines = Vec::new();
    let events = child.iter().map_err(|e| ConversionError::Failed {
        tool: FFMPEG,
        details: format!("could not read ffmpeg output: {e}"),
    })?;
    for event in events {
        match event {
            FfmpegEvent::Error(msg) => error_lines.push(msg),
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, msg) => error_lines.push(msg),
            _ => {}
        }
    }

    let status = child.wait().map_err(|e| ConversionError::Failed {
        tool: FFMPEG,
        details: format!("failed waiting for ffmpeg: {e}"),
    })?;

    if !status.success() {
        return Err(ConversionError::Failed {
            tool: FFMPEG,
            details: format!("exited with {}: {}", status, error_lines.join("; ")),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_conversion_args() {
        let args = video_conversion_args(Path::new("/v/clip.mov"), Path::new("/v/clip.mp4"));
        assert_eq!(args.first().map(String::as_str), Some("-y"));
        assert_eq!(&args[1..3], ["-i", "/v/clip.mov"]);
        assert_eq!(args.last().map(String::as_str), Some("/v/clip.mp4"));

        let joined = args.join(" ");
        assert!(joined.contains("-c:v libx264 -preset fast"));
        assert!(joined.contains("-pix_fmt yuv420p"));
        assert!(joined.contains("-c:a aac"));
        assert!(joined.contains("-movflags +faststart"));
    }
}
