use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{Board, HoleCards};

use super::hand_rank::EvaluatedHand;
use super::lookup_tables::{longest_run, rank_to_bit, RankMask};

/// Сколько карт участвует в оценке: 2 карманные + 5 борда.
pub const EVAL_CARDS: usize = 7;

/// Минимум карт одной масти для флеша.
const FLUSH_LEN: usize = 5;

/// Главная функция: лучшая 5-карточная комбинация из hole + board.
///
/// Чистая функция: никакого состояния между вызовами, борд только читается,
/// поэтому руки одной раздачи можно оценивать параллельно.
pub fn evaluate(hole: &HoleCards, board: &Board) -> EvaluatedHand {
    let mut cards: Vec<Card> = hole
        .cards()
        .iter()
        .chain(board.cards().iter())
        .copied()
        .collect();
    cards.sort_by(|a, b| a.cmp_rank(b));

    let groups = CardGroups::from_sorted(&cards);

    let straight_top = longest_run(groups.rank_mask);
    let flush_suit = groups.flush_suit();

    // Стрит-флеш ищем только внутри масти флеша: самая длинная серия
    // по всем 7 картам не обязана лежать в одной масти.
    let straight_flush_top = match (flush_suit, straight_top) {
        (Some(suit), Some(_)) => longest_run(groups.suit_mask(suit)),
        _ => None,
    };

    // Из 7 карт нельзя одновременно собрать (стрит или флеш) и (каре или фулл-хаус),
    // а всё, что ниже стрита, уже не важно.
    let counts = if flush_suit.is_none() && straight_top.is_none() {
        RankCounts::classify(&groups)
    } else {
        RankCounts::default()
    };

    // Для кикеров — от старшей карты к младшей.
    cards.reverse();
    let descending = cards;

    if let Some(top) = straight_flush_top {
        return EvaluatedHand::StraightFlush { top };
    }

    if let Some(quads) = counts.quads {
        let [kicker] = kickers::<1>(&descending, &[quads]);
        return EvaluatedHand::FourOfAKind { quads, kicker };
    }

    match (counts.trips.as_slice(), counts.pairs.first()) {
        // Две тройки: младшая играет как пара.
        ([high, low, ..], _) => {
            return EvaluatedHand::FullHouse { trips: *high, pair: *low };
        }
        ([trips], Some(pair)) => {
            return EvaluatedHand::FullHouse { trips: *trips, pair: *pair };
        }
        _ => {}
    }

    if let Some(suit) = flush_suit {
        let suited: Vec<Card> = descending
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .collect();
        return EvaluatedHand::Flush { ranks: kickers(&suited, &[]) };
    }

    if let Some(top) = straight_top {
        return EvaluatedHand::Straight { top };
    }

    if let [trips] = counts.trips.as_slice() {
        let trips = *trips;
        return EvaluatedHand::ThreeOfAKind {
            trips,
            kickers: kickers(&descending, &[trips]),
        };
    }

    match counts.pairs.as_slice() {
        [high, low, ..] => {
            let (high, low) = (*high, *low);
            let [kicker] = kickers::<1>(&descending, &[high, low]);
            EvaluatedHand::TwoPair { high, low, kicker }
        }
        [pair] => {
            let pair = *pair;
            EvaluatedHand::Pair {
                pair,
                kickers: kickers(&descending, &[pair]),
            }
        }
        [] => EvaluatedHand::HighCard {
            ranks: kickers(&descending, &[]),
        },
    }
}

/// Группировки 7 карт: по рангу (пары/сеты/каре) и по масти (флеш).
struct CardGroups {
    /// Кол-во карт каждого ранга, индекс = `Rank::value()`.
    rank_counts: [u8; 15],
    rank_mask: RankMask,
    /// Маска рангов по каждой масти, индекс = `Suit::index()`.
    suit_masks: [RankMask; 4],
    suit_counts: [u8; 4],
}

impl CardGroups {
    fn from_sorted(cards: &[Card]) -> Self {
        debug_assert_eq!(cards.len(), EVAL_CARDS);

        let mut groups = CardGroups {
            rank_counts: [0; 15],
            rank_mask: 0,
            suit_masks: [0; 4],
            suit_counts: [0; 4],
        };

        for card in cards {
            let bit = rank_to_bit(card.rank);
            groups.rank_counts[usize::from(card.rank.value())] += 1;
            groups.rank_mask |= bit;
            groups.suit_masks[card.suit.index()] |= bit;
            groups.suit_counts[card.suit.index()] += 1;
        }

        groups
    }

    /// Из 7 карт флеш может быть максимум в одной масти.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .find(|s| usize::from(self.suit_counts[s.index()]) >= FLUSH_LEN)
    }

    fn suit_mask(&self, suit: Suit) -> RankMask {
        self.suit_masks[suit.index()]
    }

    fn count(&self, rank: Rank) -> u8 {
        self.rank_counts[usize::from(rank.value())]
    }
}

/// Ранги с повторами, от старшего к младшему.
#[derive(Default)]
struct RankCounts {
    quads: Option<Rank>,
    /// Из 7 карт возможно до двух троек.
    trips: Vec<Rank>,
    pairs: Vec<Rank>,
}

impl RankCounts {
    fn classify(groups: &CardGroups) -> Self {
        let mut counts = RankCounts::default();
        for rank in Rank::ALL.into_iter().rev() {
            match groups.count(rank) {
                4 => counts.quads = Some(rank),
                3 => counts.trips.push(rank),
                2 => counts.pairs.push(rank),
                _ => {}
            }
        }
        counts
    }
}

/// Первые `N` рангов из карт (уже по убыванию), пропуская ранги из `exclude`.
///
/// На 7 картах кандидатов всегда хватает; иначе хвост останется двойками.
fn kickers<const N: usize>(descending: &[Card], exclude: &[Rank]) -> [Rank; N] {
    let mut out = [Rank::Two; N];
    let mut filled = 0;
    for (slot, rank) in out.iter_mut().zip(
        descending
            .iter()
            .map(|c| c.rank)
            .filter(|r| !exclude.contains(r)),
    ) {
        *slot = rank;
        filled += 1;
    }
    debug_assert_eq!(filled, N, "недостаточно карт для кикеров");
    out
}
