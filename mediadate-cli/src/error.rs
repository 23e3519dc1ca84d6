// ============================================================================
// mediadate-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use mediadate_core::CoreResult;

/// Type alias for CLI results; every failure is a `CoreError`.
pub type CliResult<T> = CoreResult<T>;
