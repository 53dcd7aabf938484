//! Board geometry shared by the per-piece attack tables.
//!
//! Offsets are `(file_delta, rank_delta)` pairs. Every helper bounds-checks
//! the target square before producing a bit, so no table or ray can contain
//! a square off the 8x8 board.

pub type Offset = (i32, i32);

/// Bit for `(file, rank)`, or `0` when off the board.
pub const fn bit_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << (rank as usize * 8 + file as usize)
}

/// Precompute single-step ("leaper") targets for every square.
pub const fn leaper_table(offsets: &[Offset]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            targets |= bit_if_on_board(file + offsets[i].0, rank + offsets[i].1);
            i += 1;
        }
        table[sq] = targets;
        sq += 1;
    }

    table
}

/// Walk outward from `square` one step at a time. The first occupied square
/// is included and ends the ray; whether it is a legal destination (enemy) or
/// not (friend) is decided by the caller's own-occupancy mask.
pub fn trace_ray(square: u8, step: Offset, occupancy: u64) -> u64 {
    let (file_step, rank_step) = step;
    let mut file = (square % 8) as i32 + file_step;
    let mut rank = (square / 8) as i32 + rank_step;
    let mut reach = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        reach |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    reach
}

/// Union of `trace_ray` over several directions.
pub fn slide(square: u8, directions: &[Offset], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, step| acc | trace_ray(square, *step, occupancy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_offsets_produce_no_bit() {
        assert_eq!(bit_if_on_board(-1, 0), 0);
        assert_eq!(bit_if_on_board(0, 8), 0);
        assert_eq!(bit_if_on_board(7, 7), 1u64 << 63);
    }

    #[test]
    fn ray_stops_on_first_blocker() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let reach = trace_ray(a1, (0, 1), blocker_on_a4);

        assert_eq!(reach, (1u64 << 8) | (1u64 << 16) | (1u64 << 24));
    }
}
