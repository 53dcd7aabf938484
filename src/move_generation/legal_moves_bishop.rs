use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::MoveList;

/// Diagonal slides for `side`'s bishops, or for the pieces named by
/// `piece_override` (queens reuse this with `Some(PieceKind::Queen)`).
pub fn bishop_moves(
    game_state: &GameState,
    side: Color,
    piece_override: Option<PieceKind>,
) -> MoveList {
    let mut out = MoveList::new();
    generate_bishop_moves(game_state, side, piece_override, &mut out);
    out
}

pub fn generate_bishop_moves(
    game_state: &GameState,
    side: Color,
    piece_override: Option<PieceKind>,
    out: &mut MoveList,
) {
    let piece = piece_override.unwrap_or(PieceKind::Bishop);
    let own_occ = game_state.occupancy(side);
    for_each_piece(game_state, side, piece, |from| {
        let reach = bishop_attacks(from, game_state.occupancy_all) & !own_occ;
        push_targets(from, reach, out);
    });
}
