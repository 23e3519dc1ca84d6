//! Implementation of the folder processing run.
//!
//! Builds the core configuration from the parsed arguments, checks the
//! conversion tools when they will actually be used, and delegates to
//! `mediadate_core::process_folder` with the system collaborators.

use crate::cli::Cli;
use crate::error::CliResult;

use mediadate_core::external::{
    CONVERSION_TOOLS, ExternalConverter, SystemMetadataSource, SystemTrash, check_dependency,
};
use mediadate_core::{BatchOutcome, CoreConfig, CoreConfigBuilder, LogFacade, process_folder};

use log::{debug, warn};
use std::path::PathBuf;

/// Builds the run configuration from the command line.
pub fn build_config(args: &Cli, folder: PathBuf) -> CoreConfig {
    CoreConfigBuilder::new()
        .folder(folder)
        .commit(args.commit)
        .convert(!args.no_convert)
        .worker_count(args.workers)
        .build()
}

/// Warns about missing conversion tools; conversions needing them will fail per file.
fn check_conversion_tools() {
    for tool in CONVERSION_TOOLS {
        match check_dependency(tool) {
            Ok(()) => debug!("Found {}", tool),
            Err(e) => warn!("{}: conversions that need it will fail", e),
        }
    }
}

/// Runs one processing pass over `folder`.
pub fn run_process(args: &Cli, folder: PathBuf) -> CliResult<BatchOutcome> {
    let config = build_config(args, folder);
    debug!("Configuration: {:?}", config);

    if config.commit && config.convert {
        check_conversion_tools();
    }

    process_folder(
        &config,
        &SystemMetadataSource,
        &ExternalConverter,
        &SystemTrash,
        &LogFacade,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_maps_flags() {
        let cli = Cli::parse_from(["mediadate", "--no-convert", "--workers", "3", "-c"]);
        let config = build_config(&cli, PathBuf::from("/photos"));
        assert_eq!(config.folder, PathBuf::from("/photos"));
        assert!(config.commit);
        assert!(!config.convert);
        assert_eq!(config.worker_count, 3);
    }
}
