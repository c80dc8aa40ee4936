// logging.rs - `log` backend selection
//
// wasm32 builds log to the browser console through console_log. Native
// builds (tests, tools) go through env_logger, where RUST_LOG can narrow
// the level per module.

use log::LevelFilter;

/// Install the platform logger at `level`.
///
/// Only the first call installs a backend. Later calls keep that backend
/// and just move the global level, so the host may call this again to
/// turn verbosity up or down.
pub fn init(level: LevelFilter) {
    match install(level) {
        Ok(()) => log::debug!("logger installed at {level}"),
        Err(e) => log::debug!("keeping existing logger: {e}"),
    }
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    // Off has no Level; install at Error and let the max level silence it
    let level = level.to_level().unwrap_or(log::Level::Error);
    console_log::init_with_level(level)
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
}

/// Parse a level name coming from the host ("info", "debug", ...).
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}
