//! Copy-make move application.
//!
//! Produces the position after a move without touching the input snapshot:
//! the captured piece (if any) is cleared, castling relocates the rook,
//! promotions become queens, castling rights are updated and the side to
//! move flips. A two-file king move is only accepted when the matching
//! castling right, home rook and empty lane are all present.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_lane_for, rook_home_right};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    mv.ensure_on_board()?;
    let (moving_color, moved_piece) = game_state
        .piece_on(mv.from)
        .ok_or_else(|| ChessError::malformed(format!("no piece on from-square {}", mv.from)))?;

    let lane = if moved_piece == PieceKind::King {
        castling_lane_for(moving_color, mv.from, mv.to)
    } else {
        None
    };
    if let Some(lane) = lane {
        let rook_home = game_state.pieces_of(moving_color, PieceKind::Rook) & (1u64 << lane.rook_from);
        if (game_state.castling_rights & lane.right) == 0
            || rook_home == 0
            || (game_state.occupancy_all & lane.between) != 0
        {
            return Err(ChessError::malformed(format!(
                "castling {mv} without right, home rook or empty lane"
            )));
        }
    }

    let mut next = game_state.clone();
    let from_mask = 1u64 << mv.from;
    let to_mask = 1u64 << mv.to;

    next.pieces[moving_color.index()][moved_piece.index()] &= !from_mask;

    // Captures: whatever enemy piece stands on the destination leaves the board.
    for bb in next.pieces[moving_color.opposite().index()].iter_mut() {
        *bb &= !to_mask;
    }

    let placed = if mv.promotion && moved_piece == PieceKind::Pawn {
        PieceKind::Queen
    } else {
        moved_piece
    };
    next.pieces[moving_color.index()][placed.index()] |= to_mask;

    if let Some(lane) = lane {
        let rooks = &mut next.pieces[moving_color.index()][PieceKind::Rook.index()];
        *rooks &= !(1u64 << lane.rook_from);
        *rooks |= 1u64 << lane.rook_to;
    }

    update_castling_rights(&mut next, moving_color, mv, moved_piece);

    next.side_to_move = moving_color.opposite();
    next.refresh_occupancy();

    Ok(next)
}

fn update_castling_rights(game_state: &mut GameState, moving_color: Color, mv: Move, moved_piece: PieceKind) {
    if moved_piece == PieceKind::King {
        game_state.castling_rights &= match moving_color {
            Color::White => !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE),
            Color::Black => !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE),
        };
    }

    // A rook leaving its corner, or anything landing on one, ends that right.
    if moved_piece == PieceKind::Rook {
        game_state.castling_rights &= !rook_home_right(mv.from);
    }
    game_state.castling_rights &= !rook_home_right(mv.to);
}
