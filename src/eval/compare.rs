use core::cmp::Ordering;

use crate::domain::card::Rank;
use crate::domain::hand::{Board, HoleCards};

use super::evaluator::evaluate;
use super::hand_rank::EvaluatedHand;

/// Рука игрока вместе с её оценкой — то, что сортируется внутри раздачи.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedHand {
    pub hole: HoleCards,
    pub evaluated: EvaluatedHand,
    /// Текст карманных карт, вторичный ключ сортировки.
    token: String,
}

impl RankedHand {
    /// Оценить руку против борда.
    pub fn evaluate(hole: HoleCards, board: &Board) -> Self {
        Self::from_parts(hole, evaluate(&hole, board))
    }

    pub fn from_parts(hole: HoleCards, evaluated: EvaluatedHand) -> Self {
        Self {
            token: hole.token(),
            hole,
            evaluated,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Порядок по покерной силе.
///
/// Сначала категория, затем ключи категории по позициям (старший ранг лучше).
/// `Equal` означает настоящую ничью (сплит).
pub fn compare_value(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    use EvaluatedHand::*;

    let by_category = a.category().strength().cmp(&b.category().strength());
    if by_category != Ordering::Equal {
        return by_category;
    }

    match (a, b) {
        (StraightFlush { top: x }, StraightFlush { top: y })
        | (Straight { top: x }, Straight { top: y }) => x.cmp(y),

        (FourOfAKind { quads: q1, kicker: k1 }, FourOfAKind { quads: q2, kicker: k2 }) => {
            q1.cmp(q2).then_with(|| k1.cmp(k2))
        }

        (FullHouse { trips: t1, pair: p1 }, FullHouse { trips: t2, pair: p2 }) => {
            t1.cmp(t2).then_with(|| p1.cmp(p2))
        }

        (Flush { ranks: r1 }, Flush { ranks: r2 })
        | (HighCard { ranks: r1 }, HighCard { ranks: r2 }) => compare_kickers(r1, r2),

        (
            ThreeOfAKind { trips: t1, kickers: k1 },
            ThreeOfAKind { trips: t2, kickers: k2 },
        ) => t1.cmp(t2).then_with(|| compare_kickers(k1, k2)),

        (
            TwoPair { high: h1, low: l1, kicker: k1 },
            TwoPair { high: h2, low: l2, kicker: k2 },
        ) => h1
            .cmp(h2)
            .then_with(|| l1.cmp(l2))
            .then_with(|| k1.cmp(k2)),

        (Pair { pair: p1, kickers: k1 }, Pair { pair: p2, kickers: k2 }) => {
            p1.cmp(p2).then_with(|| compare_kickers(k1, k2))
        }

        // Категории совпали, значит варианты тоже.
        _ => unreachable!("compare_value: категория совпала, а вариант нет"),
    }
}

/// Строгий порядок для вывода: сила, а при равенстве — текст карманных карт.
///
/// Для разных токенов никогда не возвращает `Equal`.
pub fn compare_display(a: &RankedHand, b: &RankedHand) -> Ordering {
    compare_value(&a.evaluated, &b.evaluated)
        .then_with(|| a.token.as_bytes().cmp(b.token.as_bytes()))
}

/// Списки рангов одной длины: решает первая отличающаяся позиция.
fn compare_kickers(ranks: &[Rank], other: &[Rank]) -> Ordering {
    ranks
        .iter()
        .zip(other.iter())
        .map(|(a, b)| a.cmp(b))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn kickers_decide_at_first_difference() {
        assert_eq!(compare_kickers(&[Ace, King, Two], &[Ace, Queen, Ace]), Ordering::Greater);
        assert_eq!(compare_kickers(&[Ace, King], &[Ace, King]), Ordering::Equal);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = EvaluatedHand::Straight { top: Five };
        let six = EvaluatedHand::Straight { top: Six };
        assert_eq!(compare_value(&wheel, &six), Ordering::Less);
    }

    #[test]
    fn display_order_breaks_value_tie_by_token() {
        let board: Board = "2c7d9hJsKc".parse().unwrap();
        let a = RankedHand::evaluate("3h4h".parse().unwrap(), &board);
        let b = RankedHand::evaluate("3s4s".parse().unwrap(), &board);
        assert_eq!(compare_value(&a.evaluated, &b.evaluated), Ordering::Equal);
        assert_eq!(compare_display(&a, &b), Ordering::Less);
        assert_eq!(compare_display(&b, &a), Ordering::Greater);
    }
}
