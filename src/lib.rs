//! Ранжирование рук Texas Hold'em.
//!
//! По общему борду из 5 карт и набору карманных рук (по 2 карты) находит
//! лучшую комбинацию каждой руки и выстраивает детерминированный порядок
//! с явной отметкой ничьих.
//!
//! Слои:
//! - `domain` — карты, руки, борд, колода;
//! - `eval` — оценка руки и сравнение;
//! - `engine` — обработка строк раздач;
//! - `api` — DTO для JSON-вывода;
//! - `infra` — конфиг, логи, RNG.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
