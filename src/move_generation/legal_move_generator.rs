//! Legality filter.
//!
//! Pseudo-legal candidates from every piece generator are simulated one at a
//! time on a scratch copy of the board; a candidate survives only if the
//! mover's king is not attacked afterwards.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::castling_lane_for;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::squares_of;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{LegalityConfig, MoveGenerator};
use crate::moves::chess_move::{Move, MoveList};

/// Every pseudo-legal move for `side`, grouped by piece type in the order
/// pawn, knight, bishop, rook, queen, king.
pub fn pseudo_legal_moves(game_state: &GameState, side: Color) -> MoveList {
    let mut pseudo = MoveList::with_capacity(64);

    generate_pawn_moves(game_state, side, &mut pseudo);
    generate_knight_moves(game_state, side, &mut pseudo);
    generate_bishop_moves(game_state, side, None, &mut pseudo);
    generate_rook_moves(game_state, side, None, &mut pseudo);
    generate_queen_moves(game_state, side, &mut pseudo);
    generate_king_moves(game_state, side, &mut pseudo);

    pseudo
}

/// True iff playing `mv` for `side` does not leave `side`'s king attacked.
pub fn is_move_legal(game_state: &GameState, mv: Move, side: Color) -> ChessResult<bool> {
    is_move_legal_with(game_state, mv, side, LegalityConfig::default())
}

pub fn is_move_legal_with(
    game_state: &GameState,
    mv: Move,
    side: Color,
    config: LegalityConfig,
) -> ChessResult<bool> {
    mv.ensure_on_board()?;
    match game_state.piece_on(mv.from) {
        Some((color, _)) if color == side => {}
        _ => {
            return Err(ChessError::malformed(format!(
                "no {side:?} piece on from-square {}",
                mv.from
            )))
        }
    }

    if config.castling_path_safety && is_castling_move(game_state, mv, side) {
        let lane_path = castling_lane_for(side, mv.from, mv.to).map_or(0, |lane| lane.king_path);
        if squares_of(lane_path).any(|sq| is_square_attacked(game_state, sq, side.opposite())) {
            trace!("rejecting {mv}: castling path attacked");
            return Ok(false);
        }
    }

    let scratch = apply_move(game_state, mv)?;
    let exposed = is_in_check(&scratch, side)?;
    if exposed {
        trace!("rejecting {mv}: leaves {side:?} king attacked");
    }
    Ok(!exposed)
}

fn is_castling_move(game_state: &GameState, mv: Move, side: Color) -> bool {
    (game_state.pieces_of(side, PieceKind::King) & (1u64 << mv.from)) != 0
        && castling_lane_for(side, mv.from, mv.to).is_some()
}

/// Legal moves for `side`: generate, then filter every candidate.
pub fn legal_moves(game_state: &GameState, side: Color) -> ChessResult<MoveList> {
    legal_moves_with(game_state, side, LegalityConfig::default())
}

pub fn legal_moves_with(
    game_state: &GameState,
    side: Color,
    config: LegalityConfig,
) -> ChessResult<MoveList> {
    // Check the king up front so an empty result always means "no legal moves".
    game_state.require_king(side)?;

    let mut legal = MoveList::new();
    for mv in pseudo_legal_moves(game_state, side) {
        if is_move_legal_with(game_state, mv, side, config)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Filtered generator for the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    pub config: LegalityConfig,
}

/// Unfiltered generator for the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> ChessResult<MoveList> {
        legal_moves_with(game_state, game_state.side_to_move, self.config)
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> ChessResult<MoveList> {
        Ok(pseudo_legal_moves(game_state, game_state.side_to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("fixture FEN should parse")
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = GameState::new_game().expect("starting FEN should parse");
        let moves = LegalMoveGenerator::default()
            .generate_moves(&game)
            .expect("start position is well formed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn every_destination_is_on_the_board() {
        let game = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for side in [Color::White, Color::Black] {
            for mv in pseudo_legal_moves(&game, side) {
                assert!(mv.from < 64 && mv.to < 64);
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White knight e2 pinned by the rook on e8.
        let game = board("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");

        assert!(moves.iter().all(|mv| mv.from != 12));
        assert!(!moves.is_empty());
    }

    #[test]
    fn checked_king_keeps_escapes() {
        // Rook e8 checks Ke1; Rd3-e3 blocks, Ke2 stays on the file.
        let game = board("4r1k1/8/8/8/8/3R4/8/4K3 w - - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");

        assert!(!moves.is_empty());
        assert!(moves.contains(&Move::quiet(19, 20)));
        assert!(!moves.contains(&Move::quiet(4, 12)));
    }

    #[test]
    fn capturing_the_checker_is_legal() {
        // Queen on e2 checks Ke1; capturing it with the king removes the attacker.
        let game = board("6k1/8/8/8/8/8/4q3/4K3 w - - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");

        assert_eq!(moves, vec![Move::quiet(4, 12)]);
    }

    #[test]
    fn captured_checker_is_removed_from_the_scratch_board() {
        // Re8 checks Ke1; Rh8xe8 only resolves the check if e8 is cleared.
        let game = board("1k2r2R/8/8/8/8/8/8/4K3 w - - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");

        assert!(moves.contains(&Move::quiet(63, 60)));
    }

    #[test]
    fn king_cannot_take_a_defended_rook() {
        let game = board("6k1/8/8/8/8/8/3r4/3rK3 w - - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");

        assert!(!moves.contains(&Move::quiet(4, 3)));
        assert!(!moves.contains(&Move::quiet(4, 11)));
        assert!(moves.is_empty());
    }

    #[test]
    fn castling_through_attack_is_rejected() {
        // Black rook on f8 covers f1.
        let game = board("5rk1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(pseudo_legal_moves(&game, Color::White).contains(&Move::quiet(4, 6)));

        let strict = legal_moves(&game, Color::White).expect("position is well formed");
        assert!(!strict.contains(&Move::quiet(4, 6)));

        let lenient = legal_moves_with(
            &game,
            Color::White,
            LegalityConfig {
                castling_path_safety: false,
            },
        )
        .expect("position is well formed");
        assert!(lenient.contains(&Move::quiet(4, 6)));
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let game = board("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1");
        let moves = legal_moves(&game, Color::White).expect("position is well formed");
        assert!(!moves.contains(&Move::quiet(4, 6)));
    }

    #[test]
    fn missing_king_is_reported() {
        let game = board("8/8/8/8/8/8/P7/8 w - - 0 1");
        assert!(matches!(
            legal_moves(&game, Color::White),
            Err(ChessError::MalformedPosition(_))
        ));
    }

    #[test]
    fn ungenerated_castle_is_reported() {
        let game = board("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(
            is_move_legal(&game, Move::quiet(4, 6), Color::White),
            Err(ChessError::MalformedPosition(_))
        ));

        let blocked = board("4k3/8/8/8/8/8/8/4Kn1R w K - 0 1");
        assert!(is_move_legal(&blocked, Move::quiet(4, 6), Color::White).is_err());
    }

    #[test]
    fn host_move_off_the_board_is_reported() {
        let game = GameState::new_game().expect("starting FEN should parse");
        assert!(matches!(
            is_move_legal(&game, Move::quiet(64, 0), Color::White),
            Err(ChessError::InvalidSquare(_))
        ));
    }

    #[test]
    fn wrong_side_piece_is_reported() {
        let game = GameState::new_game().expect("starting FEN should parse");
        assert!(is_move_legal(&game, Move::quiet(52, 44), Color::White).is_err());
    }
}
