//! End-of-run reporting.
//!
//! Turns the catalog and batch statistics into the human-readable summary
//! written through the run's [`crate::logging::LogSink`].

pub mod summary;

pub use summary::{SkipCounts, log_summary};
