//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(hole, board) -> EvaluatedHand`
//!   `compare_value(a, b)` / `compare_display(a, b)`

pub mod compare;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use compare::{compare_display, compare_value, RankedHand};
pub use evaluator::evaluate;
pub use hand_rank::{EvaluatedHand, HandCategory};
