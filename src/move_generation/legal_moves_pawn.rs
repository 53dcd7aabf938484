use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::for_each_piece;
use crate::moves::chess_move::{Move, MoveList};
use crate::moves::pawn_moves::{pawn_advance, pawn_attacks};

/// Pseudo-legal pawn moves for `side`: pushes, double pushes from the start
/// rank and diagonal captures. En passant is not generated.
pub fn pawn_moves(game_state: &GameState, side: Color) -> MoveList {
    let mut out = MoveList::new();
    generate_pawn_moves(game_state, side, &mut out);
    out
}

pub fn generate_pawn_moves(game_state: &GameState, side: Color, out: &mut MoveList) {
    let empty = game_state.empty_squares();
    let enemy_occ = game_state.occupancy(side.opposite());
    let promotes = |to: Square| rank_of(to) == side.promotion_rank();

    for_each_piece(game_state, side, PieceKind::Pawn, |from| {
        if let Some(one) = pawn_advance(side, from, 1) {
            if (empty & (1u64 << one)) != 0 {
                out.push(Move::new(from, one, promotes(one)));

                if rank_of(from) == side.pawn_start_rank() {
                    if let Some(two) = pawn_advance(side, from, 2) {
                        if (empty & (1u64 << two)) != 0 {
                            out.push(Move::quiet(from, two));
                        }
                    }
                }
            }
        }

        let mut captures = pawn_attacks(side, from) & enemy_occ;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            out.push(Move::new(from, to, promotes(to)));
            captures &= captures - 1;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    fn board(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("fixture FEN should parse")
    }

    #[test]
    fn starting_position_has_sixteen_pushes() {
        let game = GameState::new_game().expect("starting FEN should parse");
        let moves = pawn_moves(&game, Color::White);

        assert_eq!(moves.len(), 16);
        assert!(moves.iter().all(|mv| game.piece_on(mv.to).is_none()));
        assert_eq!(moves.iter().filter(|mv| mv.to - mv.from == 16).count(), 8);
    }

    #[test]
    fn single_push_off_home_rank() {
        let moves = pawn_moves(&board("8/8/8/8/8/P7/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_row_col(), ((2, 0), (3, 0), false));

        let moves = pawn_moves(&board("8/8/8/p7/8/8/8/8 b - - 0 1"), Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_row_col(), ((4, 0), (3, 0), false));
    }

    #[test]
    fn double_push_from_home_rank_only() {
        assert_eq!(pawn_moves(&board("8/8/8/8/8/8/P7/8 w - - 0 1"), Color::White).len(), 2);
        assert_eq!(pawn_moves(&board("8/p7/8/8/8/8/8/8 b - - 0 1"), Color::Black).len(), 2);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        // Intermediate square blocked.
        assert!(pawn_moves(&board("8/8/8/8/8/n7/P7/8 w - - 0 1"), Color::White).is_empty());
        // Destination blocked: only the single push remains.
        let moves = pawn_moves(&board("8/8/8/8/n7/8/P7/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, 16);
    }

    #[test]
    fn diagonal_captures_of_enemy_pieces() {
        let moves = pawn_moves(&board("8/8/8/8/1p1p4/2P5/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 3);

        let moves = pawn_moves(&board("8/2p5/1P1P4/8/8/8/8/8 w - - 0 1"), Color::Black);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn no_capture_of_friendly_pieces_or_across_the_edge() {
        let moves = pawn_moves(&board("8/8/8/8/1N6/P7/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 1);

        // h-file pawn cannot capture onto the a-file of the next rank.
        let moves = pawn_moves(&board("8/8/8/8/p7/7P/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn promotion_flag_on_farthest_rank_only() {
        let moves = pawn_moves(&board("8/P7/8/8/8/8/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].promotion);

        let moves = pawn_moves(&board("8/8/8/8/8/8/p7/8 b - - 0 1"), Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].promotion);

        let moves = pawn_moves(&board("1r6/P7/8/8/8/8/8/8 w - - 0 1"), Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotion));

        let moves = pawn_moves(&board("8/8/P7/8/8/8/8/8 w - - 0 1"), Color::White);
        assert!(!moves[0].promotion);
    }

    #[test]
    fn blocked_pawns_have_no_moves() {
        assert!(pawn_moves(&board("8/8/8/8/8/p7/P7/8 w - - 0 1"), Color::White).is_empty());
        assert!(pawn_moves(&board("8/p7/P7/8/8/8/8/8 b - - 0 1"), Color::Black).is_empty());
    }

    #[test]
    fn empty_board_yields_no_moves() {
        assert!(pawn_moves(&GameState::new_empty(), Color::White).is_empty());
    }
}
