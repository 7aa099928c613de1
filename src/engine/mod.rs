//! Обработка раздач: разбор строки, оценка рук, сортировка, вывод.
//!
//! Основные операции:
//!   - `process_line` – одна строка → отсортированная раздача или ошибка строки
//!   - `format_text` – строка вывода с `=` между равными руками
//!   - `run` – весь ввод построчно, с изоляцией ошибок по строкам

pub mod deal;
pub mod errors;
pub mod format;
pub mod runner;

pub use deal::{Deal, RankedDeal};
pub use errors::{DealError, RunError};
pub use format::format_text;
pub use runner::{process_line, render_line, run, RunStats};

/// RNG интерфейс для генерации раздач.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
