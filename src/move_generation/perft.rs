use std::sync::Arc;
use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::castling_lane_for;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

/// Leaf statistics of a perft walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions reachable in exactly `depth` plies.
pub fn perft_nodes<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_moves(game_state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let child = apply_move(game_state, mv)?;
        nodes += perft_nodes(generator, &child, depth - 1)?;
    }
    Ok(nodes)
}

/// Per-move node counts at the root, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<Vec<(Move, u64)>> {
    let mut divided = Vec::new();
    if depth == 0 {
        return Ok(divided);
    }

    for mv in generator.generate_moves(game_state)? {
        let child = apply_move(game_state, mv)?;
        divided.push((mv, perft_nodes(generator, &child, depth - 1)?));
    }
    Ok(divided)
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Same walk as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = visit_move(generator_ref.as_ref(), &root, mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessError::malformed("perft worker thread panicked"))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    for mv in generator.generate_moves(game_state)? {
        visit_move(generator, game_state, mv, depth, counts)?;
    }
    Ok(())
}

fn visit_move<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    mv: Move,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let child = apply_move(game_state, mv)?;
    if depth > 1 {
        return perft_recurse(generator, &child, depth - 1, counts);
    }

    let mover = game_state.side_to_move;
    counts.nodes += 1;
    if game_state.occupancy(mover.opposite()) & (1u64 << mv.to) != 0 {
        counts.captures += 1;
    }
    if game_state.pieces_of(mover, PieceKind::King) & (1u64 << mv.from) != 0
        && castling_lane_for(mover, mv.from, mv.to).is_some()
    {
        counts.castles += 1;
    }
    if mv.promotion {
        counts.promotions += 1;
    }
    if is_in_check(&child, child.side_to_move)? {
        counts.checks += 1;
        if generator.generate_moves(&child)?.is_empty() {
            counts.checkmates += 1;
        }
    }
    Ok(())
}
