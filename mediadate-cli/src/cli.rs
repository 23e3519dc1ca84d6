// mediadate-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use mediadate_core::config::DEFAULT_WORKER_COUNT;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mediadate: chronological media renamer",
    long_about = "Converts legacy .heic/.mov files and renames photos and videos to \
                  YYYYMMDD-<n> names ordered by capture time. Runs as a dry run unless \
                  --commit is given."
)]
pub struct Cli {
    /// Folder containing the media files to process
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub folder: String,

    /// Apply changes to disk (default is a dry run)
    #[arg(short, long, default_value_t = false)]
    pub commit: bool,

    /// Skip converting .heic to .jpg and .mov to .mp4
    #[arg(long, default_value_t = false)]
    pub no_convert: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of parallel metadata extraction workers
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORKER_COUNT,
          value_parser = clap::value_parser!(usize))]
    pub workers: usize,
}

impl Cli {
    /// Folder argument with surrounding whitespace removed.
    pub fn folder_path(&self) -> PathBuf {
        PathBuf::from(self.folder.trim())
    }
}
