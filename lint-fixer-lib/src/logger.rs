//! A module to initialize and customize the logger object used in (most) stdout.

use std::env;

// non-std crates
use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

struct SimpleLogger;

impl SimpleLogger {
    /// The level name, padded and colored to make status lines easy to scan.
    fn prefix(level: Level) -> String {
        let name = format!("{:<5}", level);
        match level {
            Level::Error => name.red().bold().to_string(),
            Level::Warn => name.yellow().bold().to_string(),
            Level::Info => name.green().to_string(),
            Level::Debug => name.blue().to_string(),
            Level::Trace => name.dimmed().to_string(),
        }
    }
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}: {}", Self::prefix(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// A private constant to manage the application's logger object.
static LOGGER: SimpleLogger = SimpleLogger;

/// A function to initialize the private `LOGGER`.
///
/// The logging level defaults to [`LevelFilter::Info`]; use [`set_verbose`] to show
/// debug output. Colors are turned off when the `NO_COLOR` environment variable is set.
/// Returns a [`SetLoggerError`] if the `LOGGER` is already initialized.
pub fn init() -> Result<(), SetLoggerError> {
    if env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}

/// Raises the maximum log level to [`LevelFilter::Debug`] when `verbose` is true.
pub fn set_verbose(verbose: bool) {
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
}

/// Log groups are only meaningful to a GitHub Actions runner.
fn in_github_actions() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|val| val == "true")
}

/// This prints a line to indicate the beginning of a related group of log statements.
///
/// Outside of GitHub Actions nothing is printed.
pub fn start_log_group(name: String) {
    if in_github_actions() {
        println!("::group::{}", name);
    }
}

/// This prints a line to indicate the ending of a related group of log statements.
pub fn end_log_group() {
    if in_github_actions() {
        println!("::endgroup::");
    }
}
