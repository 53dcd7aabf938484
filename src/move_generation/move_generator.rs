use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::MoveList;

/// Options for the legality filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalityConfig {
    /// Reject castling when the king starts on, passes through, or lands on
    /// an attacked square. When off, only the landing square is checked.
    pub castling_path_safety: bool,
}

impl Default for LegalityConfig {
    fn default() -> Self {
        Self {
            castling_path_safety: true,
        }
    }
}

/// Move list for the side to move of a position.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState) -> ChessResult<MoveList>;
}
