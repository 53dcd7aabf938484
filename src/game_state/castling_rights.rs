//! Named castling rights.
//!
//! The host-facing view of castling availability is a small map keyed by
//! right name. It converts losslessly to and from the 4-bit mask stored on
//! `GameState`.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

pub const ALL_CASTLE_RIGHTS: [CastleRight; 4] = [
    CastleRight::WhiteKingside,
    CastleRight::WhiteQueenside,
    CastleRight::BlackKingside,
    CastleRight::BlackQueenside,
];

impl CastleRight {
    pub const fn name(self) -> &'static str {
        match self {
            CastleRight::WhiteKingside => "w_king",
            CastleRight::WhiteQueenside => "w_queen",
            CastleRight::BlackKingside => "b_king",
            CastleRight::BlackQueenside => "b_queen",
        }
    }

    pub const fn mask(self) -> CastlingRights {
        match self {
            CastleRight::WhiteKingside => CASTLE_WHITE_KINGSIDE,
            CastleRight::WhiteQueenside => CASTLE_WHITE_QUEENSIDE,
            CastleRight::BlackKingside => CASTLE_BLACK_KINGSIDE,
            CastleRight::BlackQueenside => CASTLE_BLACK_QUEENSIDE,
        }
    }
}

impl fmt::Display for CastleRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CastleRight {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CASTLE_RIGHTS
            .into_iter()
            .find(|right| right.name() == s)
            .ok_or_else(|| ChessError::UnknownCastlingRight(s.to_owned()))
    }
}

/// Availability of each named castling right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamedCastlingRights {
    available: [bool; 4],
}

impl NamedCastlingRights {
    pub fn all() -> Self {
        Self { available: [true; 4] }
    }

    pub fn none() -> Self {
        Self::default()
    }

    fn slot(right: CastleRight) -> usize {
        match right {
            CastleRight::WhiteKingside => 0,
            CastleRight::WhiteQueenside => 1,
            CastleRight::BlackKingside => 2,
            CastleRight::BlackQueenside => 3,
        }
    }

    #[inline]
    pub fn get(&self, right: CastleRight) -> bool {
        self.available[Self::slot(right)]
    }

    #[inline]
    pub fn set(&mut self, right: CastleRight, available: bool) {
        self.available[Self::slot(right)] = available;
    }

    /// Look a right up by its host name, e.g. `"w_king"`.
    pub fn get_named(&self, name: &str) -> Result<bool, ChessError> {
        Ok(self.get(name.parse()?))
    }

    pub fn set_named(&mut self, name: &str, available: bool) -> Result<(), ChessError> {
        self.set(name.parse()?, available);
        Ok(())
    }

    pub fn to_mask(&self) -> CastlingRights {
        ALL_CASTLE_RIGHTS
            .into_iter()
            .filter(|right| self.get(*right))
            .fold(0, |acc, right| acc | right.mask())
    }

    pub fn from_mask(mask: CastlingRights) -> Self {
        let mut out = Self::none();
        for right in ALL_CASTLE_RIGHTS {
            out.set(right, (mask & right.mask()) != 0);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_conversion_is_lossless() {
        for mask in 0..=CASTLE_ALL {
            assert_eq!(NamedCastlingRights::from_mask(mask).to_mask(), mask);
        }
    }

    #[test]
    fn named_lookup() {
        let mut rights = NamedCastlingRights::none();
        rights.set_named("b_queen", true).expect("b_queen is a known right");

        assert!(rights.get(CastleRight::BlackQueenside));
        assert!(!rights.get_named("w_king").expect("w_king is a known right"));
        assert_eq!(rights.to_mask(), CASTLE_BLACK_QUEENSIDE);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let rights = NamedCastlingRights::all();
        assert_eq!(
            rights.get_named("w_castle"),
            Err(ChessError::UnknownCastlingRight("w_castle".to_owned()))
        );
    }
}
