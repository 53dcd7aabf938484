//! Canonical chess-rule constants.
//!
//! Starting positions and the fixed squares involved in castling.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A shuffled back-rank start without castling rights, used as a FEN fixture.
pub const SHUFFLED_START_FEN: &str = "bnrqknrb/pppppppp/8/8/8/8/PPPPPPPP/BNRQKNRB w - - 0 1";

/// One castling option: the right that enables it and the squares involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: u64,
    /// Squares the king stands on or crosses; none may be attacked.
    pub king_path: u64,
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: (1 << 5) | (1 << 6),
        king_path: (1 << 4) | (1 << 5) | (1 << 6),
    },
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: (1 << 1) | (1 << 2) | (1 << 3),
        king_path: (1 << 4) | (1 << 3) | (1 << 2),
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: (1 << 61) | (1 << 62),
        king_path: (1 << 60) | (1 << 61) | (1 << 62),
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: (1 << 57) | (1 << 58) | (1 << 59),
        king_path: (1 << 60) | (1 << 59) | (1 << 58),
    },
];

/// Lanes available to one colour.
pub fn castling_lanes(color: Color) -> impl Iterator<Item = &'static CastlingLane> {
    CASTLING_LANES.iter().filter(move |lane| lane.color == color)
}

/// The lane a king move encodes, if it is a castling move.
pub fn castling_lane_for(color: Color, from: Square, to: Square) -> Option<&'static CastlingLane> {
    castling_lanes(color).find(|lane| lane.king_from == from && lane.king_to == to)
}

/// Castling right lost when a rook leaves or is captured on `square`.
pub const fn rook_home_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
