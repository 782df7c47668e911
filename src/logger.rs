//! Logger setup for the command-line binary.

/// Initializes env_logger. Warnings are always shown, `verbose` adds debug output.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .init();
}
