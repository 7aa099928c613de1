//! Тесты оценки рук: категории, кикеры, wheel, стрит-флеш, две тройки.
//!
//! В конце — сверка 7-карточного evaluator'а с перебором всех 21
//! пятикарточных комбинаций на случайных раздачах.

use std::cmp::Ordering;

use holdem_ranker::domain::{Board, Card, Deck, HoleCards, Rank, Suit};
use holdem_ranker::engine::RandomSource;
use holdem_ranker::eval::{compare_value, evaluate, EvaluatedHand, HandCategory};
use holdem_ranker::infra::DeterministicRng;

use Rank::*;

/// Утилита: оценить руку по строкам.
fn eval(hole: &str, board: &str) -> EvaluatedHand {
    let hole: HoleCards = hole.parse().expect("hole");
    let board: Board = board.parse().expect("board");
    evaluate(&hole, &board)
}

//
// ---- Категории ----
//

#[test]
fn pair_with_three_kickers() {
    assert_eq!(
        eval("Jh2c", "Js9d7c5h3s"),
        EvaluatedHand::Pair { pair: Jack, kickers: [Nine, Seven, Five] }
    );
}

#[test]
fn three_of_a_kind_with_two_kickers() {
    assert_eq!(
        eval("Ad4s", "4cKs4h8s7s"),
        EvaluatedHand::ThreeOfAKind { trips: Four, kickers: [Ace, King] }
    );
}

#[test]
fn two_pair_kicker_can_come_from_board() {
    assert_eq!(
        eval("5c4h", "3d4s5dJsQd"),
        EvaluatedHand::TwoPair { high: Five, low: Four, kicker: Queen }
    );
}

#[test]
fn straight_eight_high() {
    assert_eq!(eval("5d6d", "4cKs4h8s7s"), EvaluatedHand::Straight { top: Eight });
}

#[test]
fn flush_on_four_board_spades() {
    assert_eq!(
        eval("As9s", "4cKs4h8s7s"),
        EvaluatedHand::Flush { ranks: [Ace, King, Nine, Eight, Seven] }
    );
}

#[test]
fn full_house_kings_over_fours() {
    assert_eq!(
        eval("KhKd", "4cKs4h8s7s"),
        EvaluatedHand::FullHouse { trips: King, pair: Four }
    );
}

#[test]
fn four_of_a_kind_with_kicker() {
    assert_eq!(
        eval("4d4s", "4cKs4h8s7s"),
        EvaluatedHand::FourOfAKind { quads: Four, kicker: King }
    );
}

#[test]
fn straight_flush_royal() {
    assert_eq!(eval("AhKh", "QhJhTh2c3d"), EvaluatedHand::StraightFlush { top: Ace });
}

//
// ---- Wheel ----
//

#[test]
fn wheel_straight_tops_at_five_not_ace() {
    let hand = eval("Ah2c", "3d4d5d9sKs");
    assert_eq!(hand, EvaluatedHand::Straight { top: Five });
    assert_eq!(hand.category(), HandCategory::Straight);
}

#[test]
fn wheel_with_extra_six_is_six_high() {
    assert_eq!(eval("Ah2c", "3d4d5d6s7s"), EvaluatedHand::Straight { top: Seven });
}

#[test]
fn wheel_loses_to_six_high_straight_on_same_board() {
    let wheel = eval("Ah2c", "3d4d5d9sKs");
    let six_high = eval("6h2c", "3d4d5d9sKs");
    assert_eq!(six_high, EvaluatedHand::Straight { top: Six });
    assert_eq!(compare_value(&wheel, &six_high), Ordering::Less);
}

#[test]
fn ace_without_two_is_not_a_wheel() {
    assert_eq!(
        eval("AhKc", "3d4d5s9s8c"),
        EvaluatedHand::HighCard { ranks: [Ace, King, Nine, Eight, Five] }
    );
}

//
// ---- Стрит-флеш и флеш ----
//

#[test]
fn straight_flush_found_only_inside_flush_suit() {
    // стрит 4-8 разномастный, в червах 4-7 + T, стрит-флеша нет
    assert_eq!(
        eval("4h5h", "6h7h8sThKd"),
        EvaluatedHand::Flush { ranks: [Ten, Seven, Six, Five, Four] }
    );
}

#[test]
fn straight_flush_lower_than_overall_run() {
    // общая серия 5-T, но в пиках только 5-9
    assert_eq!(eval("5s6s", "7s8s9sTdKh"), EvaluatedHand::StraightFlush { top: Nine });
}

#[test]
fn six_suited_cards_keep_top_five() {
    assert_eq!(
        eval("2d3d", "9dJdQdKd4c"),
        EvaluatedHand::Flush { ranks: [King, Queen, Jack, Nine, Three] }
    );
}

/// Флеш из 7 карт исключает каре и фулл-хаус.
#[test]
fn flush_board_never_reports_quads_or_full_house() {
    let hand = eval("QdQh", "QsQc2s5s9s");
    assert_eq!(hand.category(), HandCategory::FourOfAKind);

    // тройка дам + пять пик: флеш, фулл-хауса нет
    let hand = eval("Qs3s", "QcQd2s5s9s");
    assert_eq!(hand.category(), HandCategory::Flush);
}

//
// ---- Фулл-хаус из двух троек ----
//

#[test]
fn two_trips_use_higher_as_trips_and_lower_as_pair() {
    assert_eq!(
        eval("7h7d", "7c8h8d8s9c"),
        EvaluatedHand::FullHouse { trips: Eight, pair: Seven }
    );
}

#[test]
fn trips_and_two_pairs_take_highest_pair() {
    assert_eq!(
        eval("2h2d", "2cAsAdKsKd"),
        EvaluatedHand::FullHouse { trips: Two, pair: Ace }
    );
}

//
// ---- Чистота ----
//

#[test]
fn evaluation_is_idempotent_and_order_independent() {
    let board: Board = "3d4s5dJsQd".parse().unwrap();
    let hole: HoleCards = "5c4h".parse().unwrap();
    let swapped: HoleCards = "4h5c".parse().unwrap();

    let first = evaluate(&hole, &board);
    assert_eq!(evaluate(&hole, &board), first);
    assert_eq!(evaluate(&hole, &board), first);
    assert_eq!(evaluate(&swapped, &board), first);
}

//
// ---- Сверка с перебором 21 комбинации ----
//

/// Эталон: честная оценка ровно 5 карт.
fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut distinct = ranks.clone();
    distinct.dedup();
    let straight_top = if distinct.len() == 5 {
        if distinct[0].value() - distinct[4].value() == 4 {
            Some(distinct[0])
        } else if distinct == [Ace, Five, Four, Three, Two] {
            Some(Five)
        } else {
            None
        }
    } else {
        None
    };

    // (кол-во, ранг) по убыванию
    let mut groups: Vec<(usize, Rank)> = distinct
        .iter()
        .map(|r| (ranks.iter().filter(|x| *x == r).count(), *r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let pattern: Vec<usize> = groups.iter().map(|g| g.0).collect();
    let g = |i: usize| groups[i].1;

    if let (true, Some(top)) = (is_flush, straight_top) {
        return EvaluatedHand::StraightFlush { top };
    }
    match pattern.as_slice() {
        [4, 1] => return EvaluatedHand::FourOfAKind { quads: g(0), kicker: g(1) },
        [3, 2] => return EvaluatedHand::FullHouse { trips: g(0), pair: g(1) },
        _ => {}
    }
    if is_flush {
        return EvaluatedHand::Flush { ranks: [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]] };
    }
    if let Some(top) = straight_top {
        return EvaluatedHand::Straight { top };
    }
    match pattern.as_slice() {
        [3, 1, 1] => EvaluatedHand::ThreeOfAKind { trips: g(0), kickers: [g(1), g(2)] },
        [2, 2, 1] => EvaluatedHand::TwoPair { high: g(0), low: g(1), kicker: g(2) },
        [2, 1, 1, 1] => EvaluatedHand::Pair { pair: g(0), kickers: [g(1), g(2), g(3)] },
        _ => EvaluatedHand::HighCard { ranks: [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]] },
    }
}

fn best_of_21(cards: &[Card; 7]) -> EvaluatedHand {
    let mut best: Option<EvaluatedHand> = None;
    for skip_a in 0..7 {
        for skip_b in (skip_a + 1)..7 {
            let five: Vec<Card> = (0..7)
                .filter(|i| *i != skip_a && *i != skip_b)
                .map(|i| cards[i])
                .collect();
            let five: [Card; 5] = five.try_into().unwrap();
            let value = evaluate_five(&five);
            if best.map_or(true, |b| compare_value(&value, &b) == Ordering::Greater) {
                best = Some(value);
            }
        }
    }
    best.unwrap()
}

#[test]
fn matches_brute_force_on_random_deals() {
    let mut rng = DeterministicRng::from_seed(0x5EED);

    for _ in 0..3_000 {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        let seven = deck.draw_n(7);

        let hole = HoleCards::new(seven[0], seven[1]);
        let board = Board::try_from(seven[2..].to_vec()).unwrap();
        let all: [Card; 7] = seven.clone().try_into().unwrap();

        let fast = evaluate(&hole, &board);
        let slow = best_of_21(&all);
        assert_eq!(fast, slow, "hole {hole} board {board}");
    }
}

/// Много карт одной масти → никогда не каре и не фулл-хаус.
#[test]
fn five_suited_cards_exclude_quads_and_full_house_on_random_deals() {
    let mut rng = DeterministicRng::from_seed(42);

    for _ in 0..3_000 {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        let seven = deck.draw_n(7);
        let hole = HoleCards::new(seven[0], seven[1]);
        let board = Board::try_from(seven[2..].to_vec()).unwrap();

        let has_flush = Suit::ALL
            .iter()
            .any(|s| seven.iter().filter(|c| c.suit == *s).count() >= 5);
        let category = evaluate(&hole, &board).category();

        if has_flush {
            assert!(
                category != HandCategory::FourOfAKind && category != HandCategory::FullHouse,
                "{hole} {board}: {category}"
            );
        }
    }
}
