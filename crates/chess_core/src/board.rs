use std::fmt;
use std::str::FromStr;

use crate::attacks;
use crate::error::{NotationError, NotationResult};
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wk,
            (Color::White, CastleSide::Queen) => self.wq,
            (Color::Black, CastleSide::King) => self.bk,
            (Color::Black, CastleSide::Queen) => self.bq,
        }
    }

    fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wk = false,
            (Color::White, CastleSide::Queen) => self.wq = false,
            (Color::Black, CastleSide::King) => self.bk = false,
            (Color::Black, CastleSide::Queen) => self.bq = false,
        }
    }
}

/// One of the four fixed castling moves. Squares are hard-coded per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Castle {
    pub color: Color,
    pub side: CastleSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub between: &'static [Square],
    /// Squares the king passes through or lands on; none may be attacked.
    pub transit: &'static [Square],
}

const fn at(coord: &str) -> Square {
    let b = coord.as_bytes();
    match Square::from_bytes(b[0], b[1]) {
        Some(sq) => sq,
        None => panic!("invalid square literal"),
    }
}

pub static CASTLES: [Castle; 4] = [
    Castle {
        color: Color::White,
        side: CastleSide::King,
        king_from: at("e1"),
        king_to: at("g1"),
        rook_from: at("h1"),
        rook_to: at("f1"),
        between: &[at("f1"), at("g1")],
        transit: &[at("f1"), at("g1")],
    },
    Castle {
        color: Color::White,
        side: CastleSide::Queen,
        king_from: at("e1"),
        king_to: at("c1"),
        rook_from: at("a1"),
        rook_to: at("d1"),
        between: &[at("d1"), at("c1"), at("b1")],
        transit: &[at("d1"), at("c1")],
    },
    Castle {
        color: Color::Black,
        side: CastleSide::King,
        king_from: at("e8"),
        king_to: at("g8"),
        rook_from: at("h8"),
        rook_to: at("f8"),
        between: &[at("f8"), at("g8")],
        transit: &[at("f8"), at("g8")],
    },
    Castle {
        color: Color::Black,
        side: CastleSide::Queen,
        king_from: at("e8"),
        king_to: at("c8"),
        rook_from: at("a8"),
        rook_to: at("d8"),
        between: &[at("d8"), at("c8"), at("b8")],
        transit: &[at("d8"), at("c8")],
    },
];

impl Castle {
    pub fn as_move(&self) -> Move {
        Move::new(self.king_from, self.king_to)
    }

    /// The castle a king move spells out, if it is one of the four literals.
    pub fn for_move(moved: Piece, mv: Move) -> Option<&'static Castle> {
        if moved.kind != PieceKind::King {
            return None;
        }
        CASTLES
            .iter()
            .find(|c| c.color == moved.color && c.king_from == mv.from && c.king_to == mv.to)
    }
}

/// Immutable board state. `apply` returns a new position and never mutates
/// the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    pub fn empty() -> Self {
        Position {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::ALL;

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            p.grid[0][col] = Some(Piece::new(Color::Black, kind));
            p.grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.grid[7][col] = Some(Piece::new(Color::White, kind));
        }
        p
    }

    /// Parses the six-field position notation. The halfmove clock and
    /// fullmove number may be omitted and default to `0` and `1`.
    pub fn from_fen(fen: &str) -> NotationResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(NotationError::FieldCount { found: parts.len() });
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut pos = Position::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(NotationError::RankCount { found: ranks.len() });
        }

        // Listed rank 8 first, which is grid row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let piece =
                        Piece::from_symbol(ch).ok_or(NotationError::PieceSymbol { symbol: ch })?;
                    if col >= 8 {
                        return Err(NotationError::RankWidth { rank: 8 - row });
                    }
                    pos.grid[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(NotationError::RankWidth { rank: 8 - row });
            }
        }

        pos.side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(NotationError::SideToMove(stm_part.to_string())),
        };

        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(NotationError::Castling(castle_part.to_string())),
                }
            }
        }

        pos.en_passant = if ep_part == "-" {
            None
        } else {
            Some(Square::from_coord(ep_part).ok_or_else(|| NotationError::Square(ep_part.to_string()))?)
        };

        pos.halfmove_clock = halfmove_part
            .parse()
            .map_err(|_| NotationError::MoveCounter(halfmove_part.to_string()))?;
        pos.fullmove_number = fullmove_part
            .parse()
            .map_err(|_| NotationError::MoveCounter(fullmove_part.to_string()))?;

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights = [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ];
        if rights.iter().any(|(on, _)| *on) {
            out.extend(rights.iter().filter(|(on, _)| *on).map(|(_, c)| *c));
        } else {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => {
                out.push(sq.file_char());
                out.push(sq.rank_char());
            }
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row as usize][sq.col as usize] = pc;
    }

    /// Occupied squares in grid order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Scans the grid for `c`'s king. Returns the first one found.
    pub fn king_sq(&self, c: Color) -> Option<Square> {
        let king = Piece::new(c, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Piece counts for one colour, indexed by `PieceKind::idx()`.
    pub fn piece_counts(&self, c: Color) -> [u32; 6] {
        let mut counts = [0u32; 6];
        for (_, pc) in self.pieces() {
            if pc.color == c {
                counts[pc.kind.idx()] += 1;
            }
        }
        counts
    }

    pub fn in_check(&self, c: Color) -> bool {
        attacks::in_check(self, c)
    }

    /// The same placement with `c` to move. The en-passant target only
    /// makes sense for the side it was set for, so it is dropped on a switch.
    pub fn with_side_to_move(&self, c: Color) -> Position {
        let mut p = self.clone();
        if p.side_to_move != c {
            p.side_to_move = c;
            p.en_passant = None;
        }
        p
    }

    /// Plays `mv` and returns the resulting position.
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.en_passant = None;

        let Some(moved) = self.piece_at(mv.from) else {
            next.side_to_move = self.side_to_move.other();
            return next;
        };
        let captured = self.piece_at(mv.to);
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        if let Some(castle) = Castle::for_move(moved, mv) {
            next.set_piece(castle.king_from, None);
            next.set_piece(castle.rook_from, None);
            next.set_piece(castle.king_to, Some(moved));
            next.set_piece(
                castle.rook_to,
                Some(Piece::new(moved.color, PieceKind::Rook)),
            );
        } else {
            let mut placed = moved;
            if moved.kind == PieceKind::Pawn && mv.to.row == moved.color.promotion_row() {
                placed.kind = mv.promo.unwrap_or(PieceKind::Queen);
            }
            next.set_piece(mv.from, None);
            next.set_piece(mv.to, Some(placed));

            if moved.kind == PieceKind::Pawn {
                // En-passant capture: the passed-over pawn sits beside the origin.
                if captured.is_none() && mv.from.col != mv.to.col && self.en_passant == Some(mv.to) {
                    let passed = Square::new(mv.from.row, mv.to.col);
                    if self.piece_at(passed) == Some(Piece::new(moved.color.other(), PieceKind::Pawn)) {
                        next.set_piece(passed, None);
                        reset_hmc = true;
                    }
                }
                if mv.from.row.abs_diff(mv.to.row) == 2 {
                    next.en_passant = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
                }
            }
        }

        // A king or rook leaving home, or a rook captured at home, ends the right.
        for castle in &CASTLES {
            let touched = |sq: Square| sq == castle.king_from || sq == castle.rook_from;
            if touched(mv.from) || touched(mv.to) {
                next.castling.revoke(castle.color, castle.side);
            }
        }

        next.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.other();
        next
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    /// Prints the grid, rank 8 first, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row
                .iter()
                .map(|sq| sq.map_or('.', |pc| pc.symbol()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
