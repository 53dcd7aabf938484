//! FEN-to-GameState parser.
//!
//! Reads placement, side to move and castling rights. The en-passant field
//! and the two move counters are validated for shape and then dropped; the
//! last two fields may be omitted.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessError::malformed(format!(
            "FEN needs 4 to 6 fields, got {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    check_en_passant_field(fields[3])?;
    for counter in &fields[4..] {
        counter
            .parse::<u32>()
            .map_err(|_| ChessError::malformed(format!("invalid move counter: {counter}")))?;
    }

    game_state.refresh_occupancy();
    debug!("parsed FEN {fen}");

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::malformed("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::malformed(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessError::malformed(format!(
                        "rank {} has more than 8 files",
                        board_rank + 1
                    )));
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::malformed(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= 8 {
                return Err(ChessError::malformed(format!(
                    "rank {} has more than 8 files",
                    board_rank + 1
                )));
            }

            let sq = square_of(board_rank, file);
            game_state.pieces[color.index()][piece.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::malformed(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::malformed(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::malformed(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn check_en_passant_field(en_passant_part: &str) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    algebraic_to_square(en_passant_part)
        .map(|_| ())
        .map_err(|_| ChessError::malformed(format!("invalid en-passant field: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let lower = ch.to_ascii_lowercase();
    let piece = ALL_PIECE_KINDS
        .into_iter()
        .find(|piece| piece.fen_char() == lower)?;

    Some((color, piece))
}
