use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{Board, HoleCards};

/// Колода для генерации случайных раздач (стресс-прогон, тесты).
///
/// Ранжировщик колоду не использует: его раздачи приходят строками.
/// Тасует вызывающий код через `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// 52 карты по мастям в порядке `Suit::ALL`, внутри масти 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Верх колоды — конец вектора.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// До `n` карт сверху, первой идёт верхняя.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut taken = self.cards.split_off(keep);
        taken.reverse();
        taken
    }

    /// Пять карт борда; `None`, если в колоде их меньше.
    pub fn draw_board(&mut self) -> Option<Board> {
        if self.cards.len() < 5 {
            return None;
        }
        Board::try_from(self.draw_n(5)).ok()
    }

    /// Две карманные карты; `None`, если колода кончилась.
    pub fn draw_hole(&mut self) -> Option<HoleCards> {
        if self.cards.len() < 2 {
            return None;
        }
        let first = self.draw_one()?;
        let second = self.draw_one()?;
        Some(HoleCards::new(first, second))
    }
}
