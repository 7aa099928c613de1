use crate::engine::deal::RankedDeal;

/// Разделитель между руками одинаковой силы.
pub const EQUAL_VALUE_SEPARATOR: char = '=';

/// Разделитель между руками разной силы.
pub const DIFFERENT_VALUE_SEPARATOR: char = ' ';

/// Текстовая строка результата: `Ac4d=Ad4s 5d6d As9s KhKd`.
pub fn format_text(deal: &RankedDeal) -> String {
    let mut out = String::with_capacity(deal.hands.len() * 5);
    for (i, (hand, tied)) in deal.hands.iter().zip(deal.ties_with_previous()).enumerate() {
        if i > 0 {
            out.push(if tied {
                EQUAL_VALUE_SEPARATOR
            } else {
                DIFFERENT_VALUE_SEPARATOR
            });
        }
        out.push_str(hand.token());
    }
    out
}
