use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Минимальная длина серии, которая считается стритом.
pub const STRAIGHT_LEN: usize = 5;

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Есть ли ранг в маске.
pub const fn contains(mask: RankMask, rank: Rank) -> bool {
    mask & rank_to_bit(rank) != 0
}

/// Найти самую длинную серию подряд идущих рангов.
/// Возвращает старшую карту серии, если её длина >= 5.
///
/// Маска уже схлопывает дубли рангов, так что пары не рвут серию.
/// Если есть и двойка, и туз, туз ставится перед двойкой (wheel, A2345),
/// оставаясь при этом старшим для TJQKA.
pub fn longest_run(mask: RankMask) -> Option<Rank> {
    let wheel_seed = contains(mask, Rank::Ace) && contains(mask, Rank::Two);

    let mut run_len = usize::from(wheel_seed);
    let mut best_len = 0usize;
    let mut best_top: Option<Rank> = None;

    for rank in Rank::ALL {
        if contains(mask, rank) {
            run_len += 1;
            if run_len > best_len {
                best_len = run_len;
                best_top = Some(rank);
            }
        } else {
            run_len = 0;
        }
    }

    if best_len >= STRAIGHT_LEN {
        best_top
    } else {
        None
    }
}
