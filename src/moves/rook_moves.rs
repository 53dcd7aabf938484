use crate::moves::geometry::{slide, Offset};

pub const ROOK_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Orthogonal reach from `square`, each ray ending on its first blocker.
#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;

    #[test]
    fn open_board_rook_reaches_fourteen_squares() {
        assert_eq!(rook_attacks(27, 0).count_ones(), 14);
        assert_eq!(rook_attacks(0, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }
}
