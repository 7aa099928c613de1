use std::str::FromStr;

use rayon::prelude::*;

use crate::domain::errors::CardError;
use crate::domain::hand::{split_at_char, Board, HoleCards, BOARD_TOKEN_LEN};
use crate::eval::{compare_display, compare_value, RankedHand};
use crate::infra::config::{RankerConfig, SortOrder};

/// Разобранная строка раздачи: борд + карманные руки в порядке ввода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub board: Board,
    pub holes: Vec<HoleCards>,
}

/// Формат строки: первые 10 символов — борд (пять карт подряд),
/// дальше через пробелы — руки по 4 символа.
///
/// `4cKs4h8s7s Ad4s Ac4d As9s KhKd 5d6d`
impl FromStr for Deal {
    type Err = CardError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (board_str, hands_str) = split_at_char(line, BOARD_TOKEN_LEN);
        let board: Board = board_str.parse()?;

        let holes = hands_str
            .split_whitespace()
            .map(str::parse::<HoleCards>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Deal { board, holes })
    }
}

/// Раздача после оценки и сортировки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedDeal {
    pub board: Board,
    /// Порядок вывода: см. `SortOrder`.
    pub hands: Vec<RankedHand>,
}

impl Deal {
    /// Оценить все руки и отсортировать.
    ///
    /// Оценка каждой руки независима (борд только читается), так что большие
    /// раздачи считаются параллельно. `collect` — барьер: сортировка
    /// начинается только когда оценены все руки.
    pub fn rank(&self, config: &RankerConfig) -> RankedDeal {
        let board = &self.board;

        let mut hands: Vec<RankedHand> = if config.is_parallel(self.holes.len()) {
            log::debug!("оцениваем {} рук параллельно", self.holes.len());
            self.holes
                .par_iter()
                .map(|hole| RankedHand::evaluate(*hole, board))
                .collect()
        } else {
            self.holes
                .iter()
                .map(|hole| RankedHand::evaluate(*hole, board))
                .collect()
        };

        match config.order {
            SortOrder::WeakestFirst => hands.sort_by(compare_display),
            // Внутри группы равных рук токены всё равно идут по возрастанию.
            SortOrder::StrongestFirst => hands.sort_by(|a, b| {
                compare_value(&b.evaluated, &a.evaluated)
                    .then_with(|| a.token().as_bytes().cmp(b.token().as_bytes()))
            }),
        }

        RankedDeal {
            board: self.board,
            hands,
        }
    }
}

impl RankedDeal {
    /// Для каждой руки: равна ли она по силе предыдущей в порядке вывода.
    pub fn ties_with_previous(&self) -> Vec<bool> {
        let mut ties = Vec::with_capacity(self.hands.len());
        let mut previous: Option<&RankedHand> = None;
        for hand in &self.hands {
            let tied = previous
                .map(|prev| compare_value(&prev.evaluated, &hand.evaluated).is_eq())
                .unwrap_or(false);
            ties.push(tied);
            previous = Some(hand);
        }
        ties
    }
}
