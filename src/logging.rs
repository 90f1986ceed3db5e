//! Tracing subscriber setup for the binary

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Level, debug};

/// Map the number of `-v` flags to a log level
///
/// Warnings only by default, so nothing is printed over the TUI during
/// ordinary play.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Level actually installed for a run
///
/// Stderr shares the terminal with the TUI, so full-screen play without a
/// log file stays at WARN whatever `-v` asks for.
#[must_use]
pub const fn effective_level(verbose: u8, tui: bool, to_file: bool) -> Level {
    if tui && !to_file {
        Level::WARN
    } else {
        level_for_verbosity(verbose)
    }
}

/// Install the global `fmt` subscriber
///
/// Logs go to `log_file` (appended, no ANSI colors) when given, otherwise
/// to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(verbose: u8, tui: bool, log_file: Option<&Path>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(effective_level(verbose, tui, log_file.is_some()))
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    // Only fails when a global subscriber already exists; that one stays
    if let Err(err) = installed {
        debug!(%err, "tracing subscriber already installed");
    }
    Ok(())
}
