//! Command implementations for the mediadate CLI.

pub mod process;

pub use process::run_process;
