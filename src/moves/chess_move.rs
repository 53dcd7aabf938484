//! Move value produced by every generator.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// A `(from, to)` pair plus promotion flag. Castling is encoded as the king
/// moving two files; captures are implied by the destination's occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: bool,
}

/// Owned, growable move sequence returned by the generators.
pub type MoveList = Vec<Move>;

/// Host-facing coordinates: `((row, col), (row, col), promotion)`.
pub type RowColMove = ((u8, u8), (u8, u8), bool);

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: bool) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, false)
    }

    pub const fn to_row_col(self) -> RowColMove {
        (
            (rank_of(self.from), file_of(self.from)),
            (rank_of(self.to), file_of(self.to)),
            self.promotion,
        )
    }

    /// Build a move from host coordinates; rows and columns must be `0..8`.
    pub fn from_row_col(mv: RowColMove) -> ChessResult<Self> {
        let ((from_row, from_col), (to_row, to_col), promotion) = mv;
        for (row, col) in [(from_row, from_col), (to_row, to_col)] {
            if row >= 8 || col >= 8 {
                return Err(ChessError::InvalidSquare(format!("row {row}, col {col}")));
            }
        }
        Ok(Self::new(
            square_of(from_row, from_col),
            square_of(to_row, to_col),
            promotion,
        ))
    }

    /// Both squares lie in `0..64`.
    pub fn ensure_on_board(self) -> ChessResult<()> {
        for square in [self.from, self.to] {
            if square > 63 {
                return Err(ChessError::InvalidSquare(format!("index {square}")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Move {
    /// Long algebraic, with `q` appended for promotions (always to a queen).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if self.promotion {
            f.write_str("q")?;
        }
        Ok(())
    }
}
