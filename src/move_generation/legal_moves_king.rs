//! King steps plus castling candidates.
//!
//! Castling here only checks the right, the king and rook home squares and
//! the emptiness of the squares between them. Attack safety of the king's
//! path is enforced by the legality filter.

use crate::game_state::chess_rules::castling_lanes;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::chess_move::{Move, MoveList};
use crate::moves::king_moves::king_attacks;

pub fn king_moves(game_state: &GameState, side: Color) -> MoveList {
    let mut out = MoveList::new();
    generate_king_moves(game_state, side, &mut out);
    out
}

pub fn generate_king_moves(game_state: &GameState, side: Color, out: &mut MoveList) {
    let own_occ = game_state.occupancy(side);
    for_each_piece(game_state, side, PieceKind::King, |from| {
        push_targets(from, king_attacks(from) & !own_occ, out);
        generate_castling_moves(game_state, side, from, out);
    });
}

fn generate_castling_moves(game_state: &GameState, side: Color, king_from: Square, out: &mut MoveList) {
    let rooks = game_state.pieces_of(side, PieceKind::Rook);

    for lane in castling_lanes(side) {
        if lane.king_from == king_from
            && (game_state.castling_rights & lane.right) != 0
            && (rooks & (1u64 << lane.rook_from)) != 0
            && (game_state.occupancy_all & lane.between) == 0
        {
            out.push(Move::quiet(lane.king_from, lane.king_to));
        }
    }
}
