// ============================================================================
// mediadate-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Helper Functions for Logging
//
// The log backend itself (console plus rotating file) is installed by
// mediadate_core::file_logging; this file only derives the program name that
// the log file is named after.
//
// AI-ASSISTANT-INFO: Logging utilities and helper functions

use std::path::Path;

/// Fallback when the invoking program name cannot be determined.
const DEFAULT_PROGRAM_NAME: &str = "mediadate";

/// Returns the invoking program's name without directory or extension.
///
/// # Example
/// ```
/// use mediadate_cli::logging::program_name_from;
/// assert_eq!(program_name_from(Some("/usr/local/bin/mediadate")), "mediadate");
/// ```
pub fn program_name_from(argv0: Option<&str>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Program name of the current process.
pub fn program_name() -> String {
    let argv0 = std::env::args().next();
    program_name_from(argv0.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_from() {
        assert_eq!(program_name_from(Some("./target/debug/mediadate")), "mediadate");
        assert_eq!(program_name_from(Some("renamer.exe")), "renamer");
        assert_eq!(program_name_from(None), "mediadate");
        assert_eq!(program_name_from(Some("")), "mediadate");
    }
}
