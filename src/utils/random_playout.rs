//! Seeded random games over the legal move generator.
//!
//! Used by tests to sweep invariants across many reachable positions and by
//! the command-line `playout` subcommand.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    PlyLimit,
    /// The given side was mated.
    Checkmate(Color),
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct Playout {
    /// Every position visited, starting with the root.
    pub positions: Vec<GameState>,
    pub moves: Vec<Move>,
    pub end: PlayoutEnd,
}

pub fn random_playout<R: Rng + ?Sized>(
    generator: &impl MoveGenerator,
    game_state: &GameState,
    max_plies: usize,
    rng: &mut R,
) -> ChessResult<Playout> {
    let mut positions = vec![game_state.clone()];
    let mut moves = Vec::new();
    let mut current = game_state.clone();

    let end = loop {
        let legal = generator.generate_moves(&current)?;
        let Some(&picked) = legal.as_slice().choose(rng) else {
            let side = current.side_to_move;
            break if is_in_check(&current, side)? {
                PlayoutEnd::Checkmate(side)
            } else {
                PlayoutEnd::Stalemate
            };
        };
        if moves.len() >= max_plies {
            break PlayoutEnd::PlyLimit;
        }

        current = apply_move(&current, picked)?;
        moves.push(picked);
        positions.push(current.clone());
    };

    debug!("playout ended after {} plies: {end:?}", moves.len());
    Ok(Playout {
        positions,
        moves,
        end,
    })
}

/// Reproducible playout with the default legal generator.
pub fn seeded_playout(game_state: &GameState, max_plies: usize, seed: u64) -> ChessResult<Playout> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_playout(&LegalMoveGenerator::default(), game_state, max_plies, &mut rng)
}
