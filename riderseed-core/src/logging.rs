//! Log output for seeding runs.
//!
//! INFO carries the run summary, DEBUG adds one line per written batch and
//! TRACE exposes driver internals.

use crate::Result;

/// Maps `-v` occurrences and `-q` onto a maximum log level.
///
/// `-q` wins over any number of `-v` flags, leaving only the fatal error
/// that ends a run.
pub fn level_for(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

/// Installs the global fmt subscriber for the riderseed binary.
///
/// Targets, thread ids and source locations are left out so progress lines
/// stay short.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| {
            crate::error::SeedError::configuration(format!(
                "Failed to initialize logging: {}",
                e
            ))
        })
}
