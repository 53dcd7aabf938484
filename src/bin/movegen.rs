//! Command-line front end for move generation, perft and evaluation.
//!
//! Usage:
//! `cargo run --release --bin movegen -- moves --fen "<fen>"`
//! `cargo run --release --bin movegen -- perft --depth 4 --divide`
//! `RUST_LOG=debug cargo run --bin movegen -- playout --plies 80 --seed 3`

use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use log::info;

use chess_movegen::errors::ChessResult;
use chess_movegen::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_movegen::game_state::game_state::GameState;
use chess_movegen::move_generation::checkmate::{is_stalemate, side_mate};
use chess_movegen::move_generation::legal_move_checks::{attackers_to_square, is_in_check};
use chess_movegen::move_generation::legal_move_generator::{
    LegalMoveGenerator, PseudoLegalMoveGenerator,
};
use chess_movegen::move_generation::move_generator::{LegalityConfig, MoveGenerator};
use chess_movegen::move_generation::perft::{perft_divide, perft_multi_threaded};
use chess_movegen::search::board_scoring::{BoardScorer, EvalConfig, ZoneMaterialScorer};
use chess_movegen::utils::algebraic::square_to_algebraic;
use chess_movegen::utils::random_playout::seeded_playout;
use chess_movegen::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// Position in Forsyth-Edwards Notation
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,
}

impl PositionArgs {
    fn game(&self) -> ChessResult<GameState> {
        GameState::from_fen(&self.fen)
    }
}

fn legality(unsafe_castling: bool) -> LegalityConfig {
    LegalityConfig {
        castling_path_safety: !unsafe_castling,
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List moves for the side to move
    Moves {
        #[command(flatten)]
        position: PositionArgs,

        /// Skip the legality filter
        #[arg(long)]
        pseudo: bool,

        /// Allow castling when the king passes through an attacked square
        #[arg(long)]
        unsafe_castling: bool,
    },
    /// Count leaf nodes to a fixed depth
    Perft {
        #[command(flatten)]
        position: PositionArgs,

        #[arg(long, default_value_t = 3)]
        depth: u8,

        /// Print per-move counts at the root
        #[arg(long)]
        divide: bool,

        /// Allow castling when the king passes through an attacked square
        #[arg(long)]
        unsafe_castling: bool,
    },
    /// Static evaluation in white-relative centipawns
    Eval {
        #[command(flatten)]
        position: PositionArgs,

        #[arg(long, default_value_t = EvalConfig::default().mate_score)]
        mate_score: i32,
    },
    /// Play random legal moves from the position
    Playout {
        #[command(flatten)]
        position: PositionArgs,

        #[arg(long, default_value_t = 100)]
        plies: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> ChessResult<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    match cli.command {
        Command::Moves {
            position,
            pseudo,
            unsafe_castling,
        } => {
            let game = position.game()?;
            let moves = if pseudo {
                PseudoLegalMoveGenerator.generate_moves(&game)?
            } else {
                LegalMoveGenerator {
                    config: legality(unsafe_castling),
                }
                .generate_moves(&game)?
            };
            println!("{}", render_game_state(&game));
            let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
            println!("{} moves: {}", listed.len(), listed.join(" "));
        }
        Command::Perft {
            position,
            depth,
            divide,
            unsafe_castling,
        } => {
            let game = position.game()?;
            let generator = LegalMoveGenerator {
                config: legality(unsafe_castling),
            };
            let started = Instant::now();
            if divide {
                for (mv, nodes) in perft_divide(&generator, &game, depth)? {
                    println!("{mv}: {nodes}");
                }
            }
            let counts = perft_multi_threaded(Arc::new(generator), &game, depth)?;
            let elapsed = started.elapsed();
            println!("{counts:?}");
            info!(
                "perft depth {depth}: {} nodes in {:.3}s",
                counts.nodes,
                elapsed.as_secs_f64()
            );
        }
        Command::Eval {
            position,
            mate_score,
        } => {
            let game = position.game()?;
            let scorer = ZoneMaterialScorer::new(EvalConfig { mate_score });
            let side = game.side_to_move;
            println!("{}", render_game_state(&game));
            println!("score: {}", scorer.score(&game)?);
            println!("in check: {}", is_in_check(&game, side)?);
            let king = game.require_king(side)?;
            for (square, piece) in attackers_to_square(&game, king, side.opposite()) {
                println!("checker: {piece:?} on {}", square_to_algebraic(square)?);
            }
            println!("mated: {}", side_mate(&game, side)?);
            println!("stalemated: {}", is_stalemate(&game, side)?);
        }
        Command::Playout {
            position,
            plies,
            seed,
        } => {
            let game = position.game()?;
            let playout = seeded_playout(&game, plies, seed)?;
            let listed: Vec<String> = playout.moves.iter().map(ToString::to_string).collect();
            println!("{}", listed.join(" "));
            if let Some(last) = playout.positions.last() {
                println!("{}", render_game_state(last));
                println!("{}", last.get_fen());
            }
            println!("end: {:?}", playout.end);
        }
    }

    Ok(())
}
