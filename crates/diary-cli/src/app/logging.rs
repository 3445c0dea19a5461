//! Logging bootstrap.
//!
//! Logs go to stderr so they never interleave with the interactive screen on
//! stdout. `RUST_LOG`, when set, takes precedence over `-v`.

use log::LevelFilter;

/// Map the `-v` count to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once; later calls are
/// ignored.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
