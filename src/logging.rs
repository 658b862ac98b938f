use log::{debug, error, info, log_enabled, warn, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// Verbosity is controlled through `RUST_LOG`, e.g.
/// `RUST_LOG=zb_installcode=debug`.
pub fn init_logger() {
    env_logger::init();
}

/// Initializes the logger, returning an error instead of panicking when a
/// logger has already been installed (useful from tests and embedders).
pub fn try_init_logger() -> Result<(), log::SetLoggerError> {
    env_logger::try_init()
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs a warning message.
pub fn log_warn(message: &str) {
    if log_enabled!(Level::Warn) {
        warn!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}
