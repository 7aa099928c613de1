//! Внешнее представление результатов (JSON-вывод CLI).

pub mod dto;

pub use dto::*;
