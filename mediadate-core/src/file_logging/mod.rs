//! Logging backend configuration.
//!
//! The core components report through the [`crate::logging::LogSink`] port;
//! this module wires the `log` facade behind [`crate::logging::LogFacade`] to
//! the console and to a rotating log file named after the invoking program.

pub mod setup;

pub use setup::{log_file_path, setup_logging};
