//! King step table. Castling is handled by the king generator, not here.

use crate::moves::geometry::{leaper_table, Offset};

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [u64; 64] = leaper_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::king_attacks;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
    }

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        assert_eq!(king_attacks(28).count_ones(), 8);
    }
}
