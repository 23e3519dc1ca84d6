//! FFprobe integration for container creation time.
//!
//! Runs ffprobe asking only for `format_tags=creation_time` and reads the
//! value out of its JSON output.

use crate::error::ProbeError;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Default, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: Option<ProbeFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    tags: Option<ProbeTags>,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeTags {
    #[serde(default)]
    creation_time: Option<String>,
}

/// Arguments passed to ffprobe for one file.
pub fn probe_args(path: &Path) -> Vec<String> {
    vec![
        "-v".to_string(),
        "quiet".to_string(),
        "-print_format".to_string(),
        "json".to_string(),
        "-show_entries".to_string(),
        "format_tags=creation_time".to_string(),
        "-i".to_string(),
        path.to_string_lossy().into_owned(),
    ]
}

/// Returns the container's `creation_time` tag, if ffprobe reports one.
pub fn probe_container_creation_time(path: &Path) -> Result<Option<String>, ProbeError> {
    let output = Command::new("ffprobe")
        .args(probe_args(path))
        .output()
        .map_err(ProbeError::Start)?;

    if !output.status.success() {
        return Err(ProbeError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    parse_creation_time(&output.stdout)
}

/// Extracts `format.tags.creation_time` from ffprobe's JSON output.
pub fn parse_creation_time(stdout: &[u8]) -> Result<Option<String>, ProbeError> {
    let parsed: ProbeOutput = serde_json::from_slice(stdout)?;
    Ok(parsed
        .format
        .and_then(|format| format.tags)
        .and_then(|tags| tags.creation_time)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_creation_time_present() {
        let json = br#"{"format": {"tags": {"creation_time": "2023-10-15T12:00:00.000000Z"}}}"#;
        assert_eq!(
            parse_creation_time(json).unwrap().as_deref(),
            Some("2023-10-15T12:00:00.000000Z")
        );
    }

    #[test]
    fn test_parse_creation_time_missing_sections() {
        assert_eq!(parse_creation_time(b"{}").unwrap(), None);
        assert_eq!(parse_creation_time(br#"{"format": {}}"#).unwrap(), None);
        assert_eq!(parse_creation_time(br#"{"format": {"tags": {}}}"#).unwrap(), None);
        assert_eq!(
            parse_creation_time(br#"{"format": {"tags": {"creation_time": ""}}}"#).unwrap(),
            None
        );
    }

    #[test]
    fn test_parse_creation_time_rejects_garbage() {
        assert!(matches!(parse_creation_time(b"not json"), Err(ProbeError::Json(_))));
    }

    #[test]
    fn test_probe_args_request_only_creation_time() {
        let args = probe_args(Path::new("/videos/clip.mov"));
        assert!(args.contains(&"format_tags=creation_time".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("/videos/clip.mov"));
    }
}
