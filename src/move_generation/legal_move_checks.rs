//! Check oracle.
//!
//! Attack detection runs each enemy piece's own movement rule forward from
//! its square (pawns contribute their capture diagonals only) and asks whether
//! the target square is reached. It works on pseudo-legal reach and never
//! consults the legality filter.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::squares_of;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares a `color` `piece` standing on `from` attacks on this board.
#[inline]
pub fn attack_set(game_state: &GameState, color: Color, piece: PieceKind, from: Square) -> u64 {
    let occupancy = game_state.occupancy_all;
    match piece {
        PieceKind::Pawn => pawn_attacks(color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    }
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let target_mask = 1u64 << square;
    ALL_PIECE_KINDS.into_iter().any(|piece| {
        squares_of(game_state.pieces_of(attacker_color, piece))
            .any(|from| attack_set(game_state, attacker_color, piece, from) & target_mask != 0)
    })
}

/// True iff `color`'s king is attacked. A board without that king is
/// malformed.
pub fn is_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    let king_sq = game_state.require_king(color)?;
    Ok(is_square_attacked(game_state, king_sq, color.opposite()))
}

/// Every `attacker_color` piece that attacks `square`.
pub fn attackers_to_square(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let target_mask = 1u64 << square;
    let mut attackers = Vec::new();

    for piece in ALL_PIECE_KINDS {
        for from in squares_of(game_state.pieces_of(attacker_color, piece)) {
            if attack_set(game_state, attacker_color, piece, from) & target_mask != 0 {
                attackers.push((from, piece));
            }
        }
    }

    attackers
}
