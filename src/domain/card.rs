use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CardError;

/// Масть карты. Масти не упорядочены: участвуют только в поиске флеша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,   // ♠
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Индекс масти 0..4 (для таблиц подсчёта).
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
        }
    }

    pub const fn token(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
        }
    }

    /// Только канонические токены в нижнем регистре.
    pub fn from_token(ch: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.token() == ch)
    }
}

/// Ранг карты.
///
/// Порядок задаётся явным числом `value()` (Two = 2, ..., Ace = 14).
/// Туз здесь всегда старший; младший туз (wheel) — забота evaluator'а.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги по возрастанию.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value()`.
    pub fn from_value(v: u8) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.value() == v)
    }

    pub const fn token(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_token(ch: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.token() == ch)
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Сравнение только по рангу: `Ah` и `As` здесь равны.
    /// Не `Ord`: равенство карт учитывает масть.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(invalid()),
        };

        let rank = Rank::from_token(r_ch).ok_or_else(invalid)?;
        let suit = Suit::from_token(s_ch).ok_or_else(invalid)?;

        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_value_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn cmp_rank_ignores_suit() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ah.cmp_rank(&as_), Ordering::Equal);
        assert_ne!(ah, as_);
    }

    #[test]
    fn parsed_card_exposes_rank_and_suit() {
        let card: Card = "Td".parse().unwrap();
        assert_eq!(card.rank, Rank::Ten);
        assert_eq!(card.suit, Suit::Diamonds);
        assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    }

    #[test]
    fn lowercase_rank_is_rejected() {
        assert_eq!(
            "th".parse::<Card>(),
            Err(CardError::InvalidCard("th".to_string()))
        );
        assert!("TH".parse::<Card>().is_err());
    }
}
