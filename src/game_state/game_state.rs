//! Bitboard board snapshot.
//!
//! `GameState` is the canonical board model: twelve piece bitboards indexed
//! `[color][piece_kind]`, occupancy caches, side to move and the castling
//! bitmask. Every other surface (FEN text, the signed-code array model) is a
//! projection of this struct.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, rebuilt by `refresh_occupancy`.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
        }
    }
}

impl GameState {
    /// Empty board, white to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> ChessResult<Self> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn empty_squares(&self) -> u64 {
        !self.occupancy_all
    }

    /// Place a piece, replacing whatever stood on `square`.
    pub fn put_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        self.clear_square(square);
        self.pieces[color.index()][piece.index()] |= 1u64 << square;
        self.refresh_occupancy();
    }

    /// Remove any piece on `square`. Returns what was removed.
    pub fn remove_piece(&mut self, square: Square) -> Option<(Color, PieceKind)> {
        let removed = self.piece_on(square);
        self.clear_square(square);
        self.refresh_occupancy();
        removed
    }

    fn clear_square(&mut self, square: Square) {
        let mask = !(1u64 << square);
        for side in self.pieces.iter_mut() {
            for bb in side.iter_mut() {
                *bb &= mask;
            }
        }
    }

    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = 1u64 << square;
        for color in [Color::White, Color::Black] {
            for piece in ALL_PIECE_KINDS {
                if (self.pieces_of(color, piece) & mask) != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    pub fn refresh_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }

    /// Check the invariants of a playable position: the twelve sets are
    /// pairwise disjoint and each side has exactly one king.
    pub fn validate(&self) -> ChessResult<()> {
        let mut seen = 0u64;
        for color in [Color::White, Color::Black] {
            for piece in ALL_PIECE_KINDS {
                let bb = self.pieces_of(color, piece);
                if (seen & bb) != 0 {
                    return Err(ChessError::malformed(format!(
                        "{color:?} {piece:?} overlaps another piece set"
                    )));
                }
                seen |= bb;
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = self.pieces_of(color, PieceKind::King).count_ones();
            if kings != 1 {
                return Err(ChessError::malformed(format!(
                    "{color:?} has {kings} kings, expected 1"
                )));
            }
        }

        Ok(())
    }

    /// Like `king_square`, but a missing king is an error.
    pub fn require_king(&self, color: Color) -> ChessResult<Square> {
        self.king_square(color)
            .ok_or_else(|| ChessError::malformed(format!("no {color:?} king on the board")))
    }
}
