use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
///
/// Порядок сравнения задаёт только `strength()`, а не порядок объявления.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Все категории от слабой к сильной.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub const fn strength(self) -> u8 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::Pair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
        }
    }

    pub fn from_strength(strength: u8) -> Option<Self> {
        HandCategory::ALL
            .into_iter()
            .find(|c| c.strength() == strength)
    }

    /// Человеческое описание категории.
    pub const fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::Pair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Результат оценки руки: категория + ровно те ранги, которые нужны
/// для разрешения ничьей внутри этой категории.
///
/// Неизменяем после вычисления. Сравнение — в `eval::compare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluatedHand {
    /// Пять старших рангов по убыванию.
    HighCard { ranks: [Rank; 5] },
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    /// Старшая карта серии (для wheel — пятёрка).
    Straight { top: Rank },
    /// Пять старших рангов масти флеша по убыванию.
    Flush { ranks: [Rank; 5] },
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quads: Rank, kicker: Rank },
    StraightFlush { top: Rank },
}

impl EvaluatedHand {
    pub fn category(&self) -> HandCategory {
        match self {
            EvaluatedHand::HighCard { .. } => HandCategory::HighCard,
            EvaluatedHand::Pair { .. } => HandCategory::Pair,
            EvaluatedHand::TwoPair { .. } => HandCategory::TwoPair,
            EvaluatedHand::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            EvaluatedHand::Straight { .. } => HandCategory::Straight,
            EvaluatedHand::Flush { .. } => HandCategory::Flush,
            EvaluatedHand::FullHouse { .. } => HandCategory::FullHouse,
            EvaluatedHand::FourOfAKind { .. } => HandCategory::FourOfAKind,
            EvaluatedHand::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }

    /// Ключи разрешения ничьей в порядке значимости (от 1 до 5 рангов).
    pub fn tie_break_ranks(&self) -> Vec<Rank> {
        match *self {
            EvaluatedHand::HighCard { ranks } | EvaluatedHand::Flush { ranks } => ranks.to_vec(),
            EvaluatedHand::Pair { pair, kickers } => {
                let mut keys = vec![pair];
                keys.extend_from_slice(&kickers);
                keys
            }
            EvaluatedHand::TwoPair { high, low, kicker } => vec![high, low, kicker],
            EvaluatedHand::ThreeOfAKind { trips, kickers } => {
                let mut keys = vec![trips];
                keys.extend_from_slice(&kickers);
                keys
            }
            EvaluatedHand::Straight { top } | EvaluatedHand::StraightFlush { top } => vec![top],
            EvaluatedHand::FullHouse { trips, pair } => vec![trips, pair],
            EvaluatedHand::FourOfAKind { quads, kicker } => vec![quads, kicker],
        }
    }

    /// Упакованная сила руки (см. `HandRank::from_category_and_ranks`).
    pub fn hand_rank(&self) -> HandRank {
        HandRank::from_category_and_ranks(self.category(), &self.tie_break_ranks())
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())?;
        for rank in self.tie_break_ranks() {
            write!(f, " {rank}")?;
        }
        Ok(())
    }
}

impl HandRank {
    /// Собрать HandRank из категории и до 5 рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита, отсутствующий ранг = 0.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5, "не больше 5 рангов в HandRank");

        let mut value = u32::from(category.strength()) & 0x0F;
        for slot in 0..5 {
            let nibble = ranks.get(slot).map_or(0, |r| u32::from(r.value()));
            value = (value << 4) | nibble;
        }

        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> Option<HandCategory> {
        HandCategory::from_strength(((self.0 >> 20) & 0x0F) as u8)
    }
}
