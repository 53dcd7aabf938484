use crate::moves::geometry::{slide, Offset};

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal reach from `square`, each ray ending on its first blocker.
#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    slide(square, &BISHOP_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn open_board_bishop_on_d4_reaches_thirteen_squares() {
        assert_eq!(bishop_attacks(27, 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }
}
