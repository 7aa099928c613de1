use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;
use crate::engine::{DealError, RankedDeal};
use crate::eval::HandCategory;

/// DTO одной руки в отсортированной раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHandDto {
    /// Токен карманных карт, как во вводе: `Ac4d`.
    pub hole: String,
    pub category: HandCategory,
    /// Ранги для разрешения ничьей, по значимости.
    pub tie_break: Vec<Rank>,
    /// Упакованная сила — удобно сравнивать на стороне клиента.
    pub score: HandRank,
    /// Равна ли рука по силе предыдущей (в тексте это `=`).
    pub tied_with_previous: bool,
}

/// DTO успешно обработанной строки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealResultDto {
    pub board: String,
    pub hands: Vec<RankedHandDto>,
}

/// DTO пропущенной строки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealErrorDto {
    pub line: String,
    pub error: String,
}

impl From<&RankedDeal> for DealResultDto {
    fn from(deal: &RankedDeal) -> Self {
        let hands = deal
            .hands
            .iter()
            .zip(deal.ties_with_previous())
            .map(|(hand, tied)| RankedHandDto {
                hole: hand.token().to_string(),
                category: hand.evaluated.category(),
                tie_break: hand.evaluated.tie_break_ranks(),
                score: hand.evaluated.hand_rank(),
                tied_with_previous: tied,
            })
            .collect();

        DealResultDto {
            board: deal.board.to_string(),
            hands,
        }
    }
}

impl From<&DealError> for DealErrorDto {
    fn from(err: &DealError) -> Self {
        DealErrorDto {
            line: err.line.clone(),
            error: err.source.to_string(),
        }
    }
}
