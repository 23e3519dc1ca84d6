use crate::error::{CoreError, CoreResult};
use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::rolling_file::RollingFileAppender,
    append::rolling_file::policy::compound::{
        CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::PathBuf;

/// Line layout shared by the console and the log file.
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}";

/// Size at which the active log file is rolled over.
const LOG_ROTATE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rolled log files kept next to the active one.
const LOG_BACKUP_COUNT: u32 = 10;

/// Returns the active log file path for a program: `<program>.log` in the
/// working directory.
pub fn log_file_path(program: &str) -> PathBuf {
    PathBuf::from(format!("{program}.log"))
}

/// Installs console and rotating file logging for the whole process.
///
/// Debug level when `verbose` is set, Info otherwise. May only succeed once
/// per process, like any `log` backend.
///
/// # Errors
///
/// `CoreError::Logging` when the log file cannot be opened or a backend is
/// already installed.
pub fn setup_logging(program: &str, verbose: bool) -> CoreResult<()> {
    install_appenders(program, verbose).map_err(|e| CoreError::Logging(format!("{e:#}")))
}

fn install_appenders(program: &str, verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let roller = FixedWindowRoller::builder()
        .build(&format!("{program}.{{}}.log"), LOG_BACKUP_COUNT)?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(LOG_ROTATE_BYTES)),
        Box::new(roller),
    );

    let file_appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file_path(program), Box::new(policy))?;

    let console_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;

    Ok(())
}
