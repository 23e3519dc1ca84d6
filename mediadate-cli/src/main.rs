// mediadate-cli/src/main.rs
//
// Entry point for the mediadate command-line tool.
//
// Responsibilities include:
// - Parsing arguments and validating the target folder before anything else.
// - Setting up console and rotating file logging named after the program.
// - Running one processing pass through mediadate-core.
// - Mapping the outcome to the process exit code.

use clap::Parser;
use log::{error, info};
use mediadate_cli::logging::program_name;
use mediadate_cli::{Cli, run_process};
use mediadate_core::file_logging::setup_logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    // --- Validate Folder ---
    let folder = cli.folder_path();
    if !folder.is_dir() {
        eprintln!("Invalid folder: {}", folder.display());
        process::exit(1);
    }

    // --- Setup Logging ---
    let program = program_name();
    if let Err(e) = setup_logging(&program, cli.verbose) {
        eprintln!("{}", e);
        process::exit(1);
    }

    info!("*** Starting {} ***", program);

    match run_process(&cli, folder) {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
