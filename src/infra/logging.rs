//! Инициализация логгера для бинарников.
//!
//! Библиотека пишет только через фасад `log`; куда и с каким уровнем
//! выводить — решает бинарник.

use log::SetLoggerError;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::infra::config::LogLevel;

/// Логи в stderr, чтобы не смешиваться с результатами в stdout.
pub fn init_logging(level: LogLevel) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    TermLogger::init(
        level.to_filter(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
