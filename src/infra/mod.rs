//! Инфраструктурный слой вокруг ранжировщика:
//! - конфигурация запуска;
//! - инициализация логов;
//! - RNG-реализации для генерации раздач.

pub mod config;
pub mod logging;
pub mod rng;

pub use config::*;
pub use logging::init_logging;
pub use rng::*;
