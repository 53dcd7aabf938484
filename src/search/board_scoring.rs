//! Static position evaluation.
//!
//! Quiet positions score white-relative centipawns: material plus a
//! placement bonus read from six concentric zones. Checkmate short-circuits
//! to a sentinel signed from the side to move's point of view.

use log::debug;

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::checkmate::side_mate;
use crate::move_generation::legal_move_shared::squares_of;

pub const MATE_SCORE: i32 = 1_000_000;

/// d4, e4, d5, e5.
pub const CENTER_ZONE: u64 = 0x0000_0018_1800_0000;
/// Ring c3..f6 around the center.
pub const INNER_ZONE: u64 = 0x0000_3C24_243C_0000;
/// Ring b2..g7.
pub const NEUTRAL_ZONE: u64 = 0x007E_4242_4242_7E00;
/// a and h files, ranks 2..7.
pub const OUTER_ZONE: u64 = 0x0081_8181_8181_8100;
/// Ranks 1 and 8, files b..g.
pub const EDGE_ZONE: u64 = 0x7E00_0000_0000_007E;
pub const CORNER_ZONE: u64 = 0x8100_0000_0000_0081;

const ZONE_BONUSES: [(u64, i32); 6] = [
    (CENTER_ZONE, 50),
    (INNER_ZONE, 25),
    (NEUTRAL_ZONE, 0),
    (OUTER_ZONE, -25),
    (EDGE_ZONE, -50),
    (CORNER_ZONE, -75),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Magnitude returned when either side is checkmated.
    pub mate_score: i32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            mate_score: MATE_SCORE,
        }
    }
}

pub trait BoardScorer: Send + Sync {
    /// Score in centipawns (100 per pawn).
    fn score(&self, game_state: &GameState) -> ChessResult<i32>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneMaterialScorer {
    pub config: EvalConfig,
}

impl ZoneMaterialScorer {
    pub const fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Placement bonus for a non-king piece on `square`.
    pub fn zone_bonus(square: Square) -> i32 {
        let bit = 1u64 << square;
        ZONE_BONUSES
            .iter()
            .find(|(zone, _)| zone & bit != 0)
            .map_or(0, |(_, bonus)| *bonus)
    }

    /// Kings prefer the rim, so their bonus is mirrored.
    pub fn placement_bonus(piece: PieceKind, square: Square) -> i32 {
        match piece {
            PieceKind::King => -Self::zone_bonus(square),
            _ => Self::zone_bonus(square),
        }
    }

    /// Sum of base values and placement bonuses for `side`, in centipawns:
    /// a pawn is 100, a king 10 000, a centre square +50.
    pub fn material_score(game_state: &GameState, side: Color) -> i32 {
        let mut score = 0i32;

        for piece in ALL_PIECE_KINDS {
            let value = Self::piece_value(piece);
            for square in squares_of(game_state.pieces_of(side, piece)) {
                score += value + Self::placement_bonus(piece, square);
            }
        }

        score
    }

    /// `+mate_score` when the side to move has mated its opponent,
    /// `-mate_score` when the side to move is mated, otherwise
    /// `material_score(White) - material_score(Black)` in centipawns.
    pub fn evaluate(&self, game_state: &GameState) -> ChessResult<i32> {
        let mover = game_state.side_to_move;
        if side_mate(game_state, mover.opposite())? {
            debug!("{mover:?} delivered mate: {}", game_state.get_fen());
            return Ok(self.config.mate_score);
        }
        if side_mate(game_state, mover)? {
            debug!("{mover:?} is mated: {}", game_state.get_fen());
            return Ok(-self.config.mate_score);
        }

        Ok(Self::material_score(game_state, Color::White)
            - Self::material_score(game_state, Color::Black))
    }
}

impl BoardScorer for ZoneMaterialScorer {
    fn score(&self, game_state: &GameState) -> ChessResult<i32> {
        self.evaluate(game_state)
    }
}

/// [`ZoneMaterialScorer::evaluate`] with the default configuration.
pub fn evaluate(game_state: &GameState) -> ChessResult<i32> {
    ZoneMaterialScorer::default().evaluate(game_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;

    fn board(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("fixture FEN should parse")
    }

    #[test]
    fn zones_partition_the_board() {
        let zones = [
            CENTER_ZONE,
            INNER_ZONE,
            NEUTRAL_ZONE,
            OUTER_ZONE,
            EDGE_ZONE,
            CORNER_ZONE,
        ];
        let mut union = 0u64;
        for zone in zones {
            assert_eq!(union & zone, 0);
            union |= zone;
        }
        assert_eq!(union, u64::MAX);
    }

    #[test]
    fn zone_bonus_reads_expected_rings() {
        assert_eq!(ZoneMaterialScorer::zone_bonus(28), 50); // e4
        assert_eq!(ZoneMaterialScorer::zone_bonus(18), 25); // c3
        assert_eq!(ZoneMaterialScorer::zone_bonus(9), 0); // b2
        assert_eq!(ZoneMaterialScorer::zone_bonus(8), -25); // a2
        assert_eq!(ZoneMaterialScorer::zone_bonus(4), -50); // e1
        assert_eq!(ZoneMaterialScorer::zone_bonus(63), -75); // h8
    }

    #[test]
    fn start_position_is_balanced() {
        let game = GameState::new_game().expect("starting FEN should parse");
        assert_eq!(evaluate(&game).expect("position is well formed"), 0);
    }

    #[test]
    fn quiet_position_returns_material_difference() {
        // White: Ke1 (10000 + 50), Qd4 (900 + 50). Black: Ke8 (10000 + 50).
        let game = board("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&game).expect("position is well formed"), 950);
    }

    #[test]
    fn king_bonus_is_mirrored() {
        assert_eq!(ZoneMaterialScorer::placement_bonus(PieceKind::King, 0), 75);
        assert_eq!(ZoneMaterialScorer::placement_bonus(PieceKind::Knight, 0), -75);
        assert_eq!(ZoneMaterialScorer::placement_bonus(PieceKind::King, 27), -50);
    }

    #[test]
    fn mover_delivering_mate_scores_positive() {
        // White rooks on d1/e1/f1 mate the black king on e8.
        let game = board("4k3/8/8/8/8/8/8/3RRRK1 w - - 0 1");
        assert_eq!(evaluate(&game).expect("position is well formed"), MATE_SCORE);

        // Black rooks on d8/e8/f8 mate the white king on e1.
        let game = board("3rrrk1/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(evaluate(&game).expect("position is well formed"), MATE_SCORE);
    }

    #[test]
    fn mated_mover_scores_negative() {
        let game = board("4k3/8/8/8/8/8/8/3RRRK1 b - - 0 1");
        assert_eq!(evaluate(&game).expect("position is well formed"), -MATE_SCORE);

        let game = board("3rrrk1/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&game).expect("position is well formed"), -MATE_SCORE);
    }

    #[test]
    fn custom_mate_score_is_used() {
        let scorer = ZoneMaterialScorer::new(EvalConfig { mate_score: 42 });
        let game = board("3rrrk1/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(scorer.score(&game).expect("position is well formed"), -42);
    }

    #[test]
    fn missing_king_is_reported() {
        let game = board("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(
            evaluate(&game),
            Err(ChessError::MalformedPosition(_))
        ));
    }
}
