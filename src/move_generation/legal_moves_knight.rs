use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::chess_move::MoveList;
use crate::moves::knight_moves::knight_attacks;

pub fn knight_moves(game_state: &GameState, side: Color) -> MoveList {
    let mut out = MoveList::new();
    generate_knight_moves(game_state, side, &mut out);
    out
}

pub fn generate_knight_moves(game_state: &GameState, side: Color, out: &mut MoveList) {
    let own_occ = game_state.occupancy(side);
    for_each_piece(game_state, side, PieceKind::Knight, |from| {
        push_targets(from, knight_attacks(from) & !own_occ, out);
    });
}
