use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::CardError;

/// Длина токена карманной руки: две карты по два символа.
pub const HOLE_TOKEN_LEN: usize = 4;

/// Длина борда в строке раздачи: пять карт без разделителей.
pub const BOARD_TOKEN_LEN: usize = 10;

/// Упакованная сила руки: чем больше число, тем сильнее рука.
///
/// Заполняется в eval (см. `HandRank::from_category_and_ranks`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Карманные карты игрока — ровно две, в порядке ввода.
///
/// Уникальность карт не проверяется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    pub const fn new(first: Card, second: Card) -> Self {
        Self([first, second])
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }

    /// Токен вида `AhKd` — вторичный ключ сортировки при равной силе.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Парсинг токена из 4 символов, например "AhKd".
impl FromStr for HoleCards {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != HOLE_TOKEN_LEN {
            return Err(CardError::InvalidHandToken(s.to_string()));
        }
        let (first, second) = split_at_char(s, 2);
        Ok(HoleCards::new(first.parse()?, second.parse()?))
    }
}

/// Борд: ровно 5 общих карт, только для чтения всеми руками раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Board([Card; 5]);

impl Board {
    pub const fn new(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = CardError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let rendered: String = cards.iter().map(Card::to_string).collect();
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| CardError::InvalidBoard(rendered))?;
        Ok(Board(cards))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.0 {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Парсинг строки из 10 символов, например "4cKs4h8s7s".
impl FromStr for Board {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != BOARD_TOKEN_LEN {
            return Err(CardError::InvalidBoard(s.to_string()));
        }

        let mut cards = Vec::with_capacity(5);
        let mut rest = s;
        while !rest.is_empty() {
            let (card, tail) = split_at_char(rest, 2);
            cards.push(card.parse::<Card>()?);
            rest = tail;
        }
        Board::try_from(cards)
    }
}

/// Разрезать строку после `n` символов (не байт).
pub(crate) fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}
