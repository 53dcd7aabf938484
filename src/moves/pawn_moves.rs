use crate::game_state::chess_types::{Color, Square};
use crate::moves::geometry::{leaper_table, Offset};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = leaper_table(&WHITE_CAPTURE_OFFSETS);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = leaper_table(&BLACK_CAPTURE_OFFSETS);

const WHITE_CAPTURE_OFFSETS: [Offset; 2] = [(-1, 1), (1, 1)];
const BLACK_CAPTURE_OFFSETS: [Offset; 2] = [(-1, -1), (1, -1)];

/// Diagonal capture targets of a pawn of `color` on `square`.
#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Square `steps` ranks ahead of `square` for `color`, if still on the board.
#[inline]
pub fn pawn_advance(color: Color, square: Square, steps: u8) -> Option<Square> {
    let delta = steps.checked_mul(8)?;
    let target = match color {
        Color::White => square.checked_add(delta)?,
        Color::Black => square.checked_sub(delta)?,
    };
    (target < 64).then_some(target)
}
