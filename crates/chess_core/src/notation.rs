use std::fmt;
use std::str::FromStr;

use crate::error::{NotationError, NotationResult};
use crate::types::*;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Display for Move {
    /// Origin, destination, then the promotion letter if any: `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promo {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Syntax only; whether the move is playable depends on a position.
    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::Move(txt.to_string());
        let b = txt.as_bytes();
        if b.len() != 4 && b.len() != 5 {
            return Err(malformed());
        }
        let from = Square::from_bytes(b[0], b[1]).ok_or_else(malformed)?;
        let to = Square::from_bytes(b[2], b[3]).ok_or_else(malformed)?;
        match b.get(4) {
            Some(&letter) => {
                let kind = PieceKind::from_promotion_byte(letter).ok_or_else(malformed)?;
                Ok(Move::promoting(from, to, kind))
            }
            None => Ok(Move::new(from, to)),
        }
    }
}

/// Parses a played-move history, oldest first.
pub fn parse_history<'a, I>(moves: I) -> NotationResult<Vec<Move>>
where
    I: IntoIterator<Item = &'a str>,
{
    moves.into_iter().map(str::parse).collect()
}

/// Move strings sorted alphabetically, as printed in turn diagnostics.
pub fn sorted_notation<I>(moves: I) -> Vec<String>
where
    I: IntoIterator<Item = Move>,
{
    let mut out: Vec<String> = moves.into_iter().map(|m| m.to_string()).collect();
    out.sort();
    out
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
