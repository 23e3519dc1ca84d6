// ============================================================================
// mediadate-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the mediadate-core Library
//
// This module defines the fatal error type (CoreError) returned from the
// public entry points, and the named failure causes each external
// collaborator reports. Collaborator failures are never fatal: the stage that
// receives one degrades (fallback timestamp, unconverted entry) and logs it.
//
// KEY COMPONENTS:
// - CoreError / CoreResult: errors that abort a run or a public operation
// - ImageTagError, PropertyStoreError, ProbeError: metadata read failures
// - ConversionError, TrashError: conversion and recoverable delete failures
//
// AI-ASSISTANT-INFO: Error types for mediadate-core

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a public mediadate-core operation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type for mediadate-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Maps a failed spawn of an external command to a `CoreError`.
///
/// A missing binary becomes `DependencyNotFound`; anything else keeps the
/// underlying I/O error as `CommandStart`.
pub fn command_start_error(cmd: &str, e: std::io::Error) -> CoreError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd.to_string())
    } else {
        CoreError::CommandStart(cmd.to_string(), e)
    }
}

// ============================================================================
// COLLABORATOR FAILURES
// ============================================================================

/// Why an image capture tag could not be read.
#[derive(Error, Debug)]
pub enum ImageTagError {
    /// The file is not a decodable image container (corrupt or misnamed).
    #[error("unidentified image data: {0}")]
    Decode(String),

    #[error("I/O error reading image: {0}")]
    Io(#[from] std::io::Error),
}

/// Why the platform property store did not yield a timestamp.
#[derive(Error, Debug)]
pub enum PropertyStoreError {
    #[error("property store is not available on this platform")]
    Unsupported,

    #[error("property store query failed: {0}")]
    Query(String),

    #[error("property value is not a timestamp: {0}")]
    NotATimestamp(String),
}

/// Why the container probe did not run to completion.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to start ffprobe: {0}")]
    Start(#[source] std::io::Error),

    #[error("ffprobe exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("ffprobe output deserialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a legacy format conversion did not produce a usable output.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("failed to start {tool}: {reason}")]
    Start { tool: &'static str, reason: String },

    #[error("{tool} failed: {details}")]
    Failed { tool: &'static str, details: String },

    #[error("{} not found after conversion", .0.display())]
    MissingOutput(PathBuf),

    #[error("{} is implausibly small after conversion ({size} bytes)", .path.display())]
    UndersizedOutput { path: PathBuf, size: u64 },
}

/// Failure to move a file to the recoverable deleted-items store.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TrashError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_command_start_error_missing_binary() {
        let err = command_start_error("magick", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, CoreError::DependencyNotFound(ref cmd) if cmd == "magick"));
        assert_eq!(err.to_string(), "Required dependency 'magick' not found");
    }

    #[test]
    fn test_command_start_error_keeps_other_causes() {
        let err = command_start_error("ffmpeg", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, CoreError::CommandStart(ref cmd, _) if cmd == "ffmpeg"));
        assert!(err.to_string().starts_with("Failed to start command 'ffmpeg'"));
    }

    #[test]
    fn test_logging_error_message() {
        let err = CoreError::Logging("log file is not writable".into());
        assert_eq!(
            err.to_string(),
            "Failed to initialize logging: log file is not writable"
        );
    }
}
