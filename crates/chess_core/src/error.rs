//! Errors raised while reading position and move notation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected at least 4 space-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("piece placement must list 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} of the piece placement does not cover exactly 8 squares")]
    RankWidth { rank: usize },

    #[error("invalid piece symbol '{symbol}'")]
    PieceSymbol { symbol: char },

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling rights '{0}'")]
    Castling(String),

    #[error("invalid square '{0}'")]
    Square(String),

    #[error("invalid move counter '{0}'")]
    MoveCounter(String),

    #[error("malformed move '{0}'")]
    Move(String),
}

pub type NotationResult<T> = Result<T, NotationError>;
