//! Error taxonomy for board construction and position queries.
//!
//! Move generation itself is total; only queries that need a well-formed
//! position (a king to locate, a piece to move) or text decoding can fail.

/// Errors raised by FEN decoding, board validation and position queries.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The position cannot be represented or reasoned about.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// A named castling right was not one of `w_king`, `w_queen`, `b_king`, `b_queen`.
    #[error("unknown castling right: {0}")]
    UnknownCastlingRight(String),

    /// A coordinate could not be decoded or lies off the board.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ChessError::MalformedPosition(msg.into())
    }
}
