//! Mate and stalemate queries built on the check oracle and the legality filter.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

/// `color` is in check and has no legal move.
pub fn side_mate(game_state: &GameState, color: Color) -> ChessResult<bool> {
    if !is_in_check(game_state, color)? {
        return Ok(false);
    }
    Ok(legal_moves(game_state, color)?.is_empty())
}

pub fn w_mate(game_state: &GameState) -> ChessResult<bool> {
    side_mate(game_state, Color::White)
}

pub fn b_mate(game_state: &GameState) -> ChessResult<bool> {
    side_mate(game_state, Color::Black)
}

/// `color` is not in check but has no legal move. Not scored anywhere.
pub fn is_stalemate(game_state: &GameState, color: Color) -> ChessResult<bool> {
    if is_in_check(game_state, color)? {
        return Ok(false);
    }
    Ok(legal_moves(game_state, color)?.is_empty())
}
