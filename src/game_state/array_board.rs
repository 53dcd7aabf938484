//! Signed-code 8x8 projection of the bitboard model.
//!
//! `board[row][col]` holds `0` for empty or `±1..=6` for
//! pawn/knight/bishop/rook/queen/king, positive for white. Row 0 is rank 1
//! and column 0 is file a, so `board[r][c]` is square `r * 8 + c`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::castling_rights::NamedCastlingRights;
use crate::game_state::chess_types::*;

pub type ArrayBoard = [[i8; 8]; 8];

/// Signed code for a coloured piece.
#[inline]
pub const fn signed_code(color: Color, piece: PieceKind) -> i8 {
    color.sign() * piece.code()
}

/// Decode a signed cell value. `Ok(None)` is an empty square.
pub fn decode_cell(code: i8) -> ChessResult<Option<(Color, PieceKind)>> {
    if code == 0 {
        return Ok(None);
    }
    let color = if code > 0 { Color::White } else { Color::Black };
    PieceKind::from_code(code.saturating_abs())
        .map(|piece| Some((color, piece)))
        .ok_or_else(|| ChessError::malformed(format!("invalid piece code {code}")))
}

impl GameState {
    pub fn to_array(&self) -> ArrayBoard {
        let mut board = [[0i8; 8]; 8];
        for (row, cells) in board.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let square = square_of(row as u8, col as u8);
                if let Some((color, piece)) = self.piece_on(square) {
                    *cell = signed_code(color, piece);
                }
            }
        }
        board
    }

    pub fn from_array(
        board: &ArrayBoard,
        side_to_move: Color,
        castling: NamedCastlingRights,
    ) -> ChessResult<Self> {
        let mut state = GameState::new_empty();
        for (row, cells) in board.iter().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                if let Some((color, piece)) = decode_cell(code)? {
                    let square = square_of(row as u8, col as u8);
                    state.pieces[color.index()][piece.index()] |= 1u64 << square;
                }
            }
        }
        state.side_to_move = side_to_move;
        state.castling_rights = castling.to_mask();
        state.refresh_occupancy();
        Ok(state)
    }

    pub fn named_castling_rights(&self) -> NamedCastlingRights {
        NamedCastlingRights::from_mask(self.castling_rights)
    }
}
