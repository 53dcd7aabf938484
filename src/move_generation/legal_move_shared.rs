use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::{Move, MoveList};

/// Emit one non-promoting move per set bit of `targets`.
#[inline]
pub fn push_targets(from: Square, mut targets: u64, out: &mut MoveList) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        out.push(Move::quiet(from, to));
        targets &= targets - 1;
    }
}

/// Run `emit` for every square in the `side` bitboard of `piece`.
#[inline]
pub fn for_each_piece(
    game_state: &GameState,
    side: Color,
    piece: PieceKind,
    mut emit: impl FnMut(Square),
) {
    let mut set = game_state.pieces_of(side, piece);
    while set != 0 {
        emit(set.trailing_zeros() as Square);
        set &= set - 1;
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, side: Color, square: Square) -> Option<PieceKind> {
    match game_state.piece_on(square) {
        Some((color, piece)) if color != side => Some(piece),
        _ => None,
    }
}

/// Iterate the squares of a bitboard from a1 upward.
#[inline]
pub fn squares_of(mut set: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if set == 0 {
            return None;
        }
        let square = set.trailing_zeros() as Square;
        set &= set - 1;
        Some(square)
    })
}
