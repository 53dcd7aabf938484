use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::MoveList;

/// Queen moves are the bishop rays followed by the rook rays of the same
/// origin squares.
pub fn queen_moves(game_state: &GameState, side: Color) -> MoveList {
    let mut out = MoveList::new();
    generate_queen_moves(game_state, side, &mut out);
    out
}

pub fn generate_queen_moves(game_state: &GameState, side: Color, out: &mut MoveList) {
    generate_bishop_moves(game_state, side, Some(PieceKind::Queen), out);
    generate_rook_moves(game_state, side, Some(PieceKind::Queen), out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn central_queen_on_open_board() {
        let game = GameState::from_fen("8/8/8/8/3q4/8/8/8 b - - 0 1")
            .expect("fixture FEN should parse");
        assert_eq!(queen_moves(&game, Color::Black).len(), 27);
        assert!(queen_moves(&game, Color::White).is_empty());
    }

    #[test]
    fn queen_capture_ends_the_ray() {
        // Queen d1, black rook d4: d2, d3, d4 up the file, nothing beyond.
        let game = GameState::from_fen("8/8/8/8/3r4/8/8/3Q4 w - - 0 1")
            .expect("fixture FEN should parse");
        let moves = queen_moves(&game, Color::White);

        assert!(moves.iter().any(|mv| mv.to == 27));
        assert!(moves.iter().all(|mv| mv.to != 35));
    }
}
