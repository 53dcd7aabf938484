//! Entry points over the signed-code array model.
//!
//! Each call projects the array onto bitboards, runs the bitboard routine and
//! returns moves as `((row, col), (row, col), promotion)` tuples. Row 0 is
//! rank 1 for both colours.

use crate::errors::ChessResult;
use crate::game_state::array_board::ArrayBoard;
use crate::game_state::castling_rights::NamedCastlingRights;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::checkmate::side_mate;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{is_move_legal, legal_moves};
use crate::move_generation::legal_moves_bishop::bishop_moves;
use crate::move_generation::legal_moves_king::king_moves;
use crate::move_generation::legal_moves_knight::knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_moves;
use crate::move_generation::legal_moves_queen::queen_moves;
use crate::move_generation::legal_moves_rook::rook_moves;
use crate::moves::chess_move::{Move, MoveList, RowColMove};
use crate::search::board_scoring;

fn snapshot(
    board: &ArrayBoard,
    turn: Color,
    castling: NamedCastlingRights,
) -> ChessResult<GameState> {
    GameState::from_array(board, turn, castling)
}

fn to_host(moves: MoveList) -> Vec<RowColMove> {
    moves.into_iter().map(|mv| mv.to_row_col()).collect()
}

pub fn pawn(board: &ArrayBoard, turn: Color) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    Ok(to_host(pawn_moves(&state, turn)))
}

pub fn knight(board: &ArrayBoard, turn: Color) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    Ok(to_host(knight_moves(&state, turn)))
}

/// `equal` names the piece type to slide diagonally; bishops when `None`.
pub fn bishop(
    board: &ArrayBoard,
    turn: Color,
    equal: Option<PieceKind>,
) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    Ok(to_host(bishop_moves(&state, turn, equal)))
}

/// `equal` names the piece type to slide orthogonally; rooks when `None`.
pub fn rook(
    board: &ArrayBoard,
    turn: Color,
    equal: Option<PieceKind>,
) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    Ok(to_host(rook_moves(&state, turn, equal)))
}

pub fn queen(board: &ArrayBoard, turn: Color) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    Ok(to_host(queen_moves(&state, turn)))
}

pub fn king(
    board: &ArrayBoard,
    turn: Color,
    castling: &NamedCastlingRights,
) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, *castling)?;
    Ok(to_host(king_moves(&state, turn)))
}

/// Legal moves for `turn` with the default legality options.
pub fn legal(
    board: &ArrayBoard,
    turn: Color,
    castling: &NamedCastlingRights,
) -> ChessResult<Vec<RowColMove>> {
    let state = snapshot(board, turn, *castling)?;
    Ok(to_host(legal_moves(&state, turn)?))
}

/// Legality of one host move for `turn`. Off-board coordinates are
/// `InvalidSquare`.
pub fn is_legal(
    board: &ArrayBoard,
    turn: Color,
    castling: &NamedCastlingRights,
    mv: RowColMove,
) -> ChessResult<bool> {
    let mv = Move::from_row_col(mv)?;
    let state = snapshot(board, turn, *castling)?;
    is_move_legal(&state, mv, turn)
}

pub fn check(board: &ArrayBoard, color: Color) -> ChessResult<bool> {
    let state = snapshot(board, color, NamedCastlingRights::none())?;
    is_in_check(&state, color)
}

pub fn mate(board: &ArrayBoard, color: Color) -> ChessResult<bool> {
    let state = snapshot(board, color, NamedCastlingRights::none())?;
    side_mate(&state, color)
}

/// Centipawn score; the mate sentinel is signed from `turn`'s point of view.
pub fn evaluate(board: &ArrayBoard, turn: Color) -> ChessResult<i32> {
    let state = snapshot(board, turn, NamedCastlingRights::none())?;
    board_scoring::evaluate(&state)
}
