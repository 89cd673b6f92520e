//! Attack detection on the 8×8 grid.
//!
//! `is_attacked` probes the attacker kinds in a fixed order (pawns,
//! orthogonal sliders, diagonal sliders, knights, king) and returns on the
//! first hit.

use crate::board::Position;
use crate::types::*;

/// Orthogonal ray steps as `(row, col)`.
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal ray steps as `(row, col)`.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
];

/// Returns true if a piece of `defender`'s opponent attacks `target`.
pub fn is_attacked(pos: &Position, target: Square, defender: Color) -> bool {
    let by = defender.other();
    let holds = |sq: Square, kind: PieceKind| pos.piece_at(sq) == Some(Piece::new(by, kind));

    // An enemy pawn attacks from one row behind the target, seen from its side.
    for dcol in [-1, 1] {
        if let Some(sq) = target.offset(-by.forward(), dcol)
            && holds(sq, PieceKind::Pawn)
        {
            return true;
        }
    }

    if ray_hits(pos, target, by, &ROOK_DIRS, PieceKind::Rook) {
        return true;
    }
    if ray_hits(pos, target, by, &BISHOP_DIRS, PieceKind::Bishop) {
        return true;
    }

    for (drow, dcol) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(drow, dcol)
            && holds(sq, PieceKind::Knight)
        {
            return true;
        }
    }

    for (drow, dcol) in KING_OFFSETS {
        if let Some(sq) = target.offset(drow, dcol)
            && holds(sq, PieceKind::King)
        {
            return true;
        }
    }

    false
}

/// Walks each ray until the first occupied square; a hit is an enemy
/// `slider` or queen there.
fn ray_hits(
    pos: &Position,
    target: Square,
    by: Color,
    dirs: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(drow, dcol) in dirs {
        let mut cur = target.offset(drow, dcol);
        while let Some(sq) = cur {
            if let Some(pc) = pos.piece_at(sq) {
                if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(drow, dcol);
        }
    }
    false
}

/// Locates `c`'s king by scanning and reports whether it is attacked.
/// A side without a king is never in check.
pub fn in_check(pos: &Position, c: Color) -> bool {
    match pos.king_sq(c) {
        Some(ksq) => is_attacked(pos, ksq, c),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
