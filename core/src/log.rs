//!
//! Logging facade used throughout the node.
//!
//! The macros forward to the [`log`] crate so that any call site only needs a
//! dependency on `likr-core`. [`init_logger`] installs a `log4rs` console backend
//! configured from a `RUST_LOG`-like filter expression.
//!

mod appender;
mod consts;
mod logger;

pub use consts::DEFAULT_LOGGER_ENV;
pub use logger::LogError;

#[doc(hidden)]
pub use log as __log;

use appender::AppenderSpec;
use log::LevelFilter;
use log4rs::config::{Config, Root};
use logger::Builder;

#[macro_export]
macro_rules! trace {
    ($($t:tt)*) => (
        $crate::log::__log::trace!($($t)*)
    )
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => (
        $crate::log::__log::debug!($($t)*)
    )
}

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => (
        $crate::log::__log::info!($($t)*)
    )
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => (
        $crate::log::__log::warn!($($t)*)
    )
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => (
        $crate::log::__log::error!($($t)*)
    )
}

const CONSOLE_APPENDER: &str = "stdout";

/// Installs the console logger.
///
/// `filters` follows the `RUST_LOG` syntax, e.g. `"info,likr_consensus_core=debug"`.
/// Specs found in the [`DEFAULT_LOGGER_ENV`] environment variable are applied first
/// and may be refined by `filters`.
pub fn init_logger(filters: &str) -> Result<(), LogError> {
    let loggers = Builder::new().root_level(LevelFilter::Info).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();
    let mut stdout = AppenderSpec::console(CONSOLE_APPENDER, None);

    let config = Config::builder()
        .appender(stdout.appender()?)
        .loggers(loggers.items())
        .build(Root::builder().appender(CONSOLE_APPENDER).build(loggers.root_level()))
        .map_err(|err| LogError::ConfigError(err.to_string()))?;

    log4rs::init_config(config).map_err(|err| LogError::SetLoggerError(err.to_string()))?;
    Ok(())
}
