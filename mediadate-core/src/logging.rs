//! Logging port used by every pipeline component.
//!
//! Components never reach for process-wide logger state directly; they are
//! handed a [`LogSink`] and report through its severity-leveled methods.
//! [`LogFacade`] is the production sink and forwards to the `log` crate,
//! whose backend is configured by [`crate::file_logging`].

use log::Level;
use std::fmt;

/// Severity-leveled logging interface injected into the core components.
///
/// Implementations must be shareable across the extraction worker pool.
pub trait LogSink: Send + Sync {
    /// Records one message at the given level.
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }
}

/// Sink that forwards every message to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: "mediadate", level, "{}", args);
    }
}

/// Writes a section heading so the summary stands apart from per-file lines.
pub fn log_section(log: &dyn LogSink, title: &str) {
    log.info(format_args!(""));
    log.info(format_args!("{}", "=".repeat(50)));
    log.info(format_args!("{}", title));
    log.info(format_args!("{}", "=".repeat(50)));
}
