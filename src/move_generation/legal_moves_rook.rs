use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::chess_move::MoveList;
use crate::moves::rook_moves::rook_attacks;

/// Orthogonal slides for `side`'s rooks, or for the pieces named by
/// `piece_override`.
pub fn rook_moves(
    game_state: &GameState,
    side: Color,
    piece_override: Option<PieceKind>,
) -> MoveList {
    let mut out = MoveList::new();
    generate_rook_moves(game_state, side, piece_override, &mut out);
    out
}

pub fn generate_rook_moves(
    game_state: &GameState,
    side: Color,
    piece_override: Option<PieceKind>,
    out: &mut MoveList,
) {
    let piece = piece_override.unwrap_or(PieceKind::Rook);
    let own_occ = game_state.occupancy(side);
    for_each_piece(game_state, side, piece, |from| {
        let reach = rook_attacks(from, game_state.occupancy_all) & !own_occ;
        push_targets(from, reach, out);
    });
}
