use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// Logs go to stderr at `Info` level, or `Debug` when `debug_enabled` is set.
/// An explicit `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second initialization (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
