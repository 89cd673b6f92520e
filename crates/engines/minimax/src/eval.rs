//! Move evaluation.
//!
//! Scores the position a move produces from the point of view of the side
//! that made it. Four terms are summed: capture gain, king presence and
//! piece-count ratio, mobility, and weighted material.

use chess_core::{
    CastlingRights, Color, Move, Piece, PieceKind, Position, Square, is_attacked, legal_moves,
};

pub const PAWN_WEIGHT: f32 = 1.0;
pub const KNIGHT_WEIGHT: f32 = 3.05;
pub const BISHOP_WEIGHT: f32 = 3.33;
pub const ROOK_WEIGHT: f32 = 5.63;
pub const QUEEN_WEIGHT: f32 = 9.5;
pub const KING_WEIGHT: f32 = 200.0;

/// Capture gain is cut to this share when the capturing piece can be taken back.
const EXPOSED_CAPTURE_FACTOR: f32 = 0.66;
const MOBILITY_WEIGHT: f32 = 0.025;
/// Recent half-moves checked for a repeat of the move being scored.
pub const REPEAT_WINDOW: usize = 6;
/// More pieces than this on the board (kings included) is the early phase.
const EARLY_PHASE_PIECES: u32 = 14;

const DOUBLED_PAWN: f32 = -0.25;
const PAWN_CHAIN_BOTH: f32 = 0.25;
const PAWN_CHAIN_ONE: f32 = 0.1;
const EARLY_BISHOP_BONUS: f32 = 0.25;
const LATE_ROOK_BONUS: f32 = 0.25;
const PAIR_BONUS: f32 = 0.5;

type Table = [[f32; 8]; 8];

// Indexed [row][col], row 0 = rank 8.
#[rustfmt::skip]
const PAWN_WHITE_EARLY: Table = [
    [0.90, 0.95, 1.00, 1.00, 1.00, 1.00, 0.95, 0.90],
    [0.90, 0.95, 1.00, 1.00, 1.00, 1.00, 0.95, 0.90],
    [0.90, 0.95, 1.01, 1.03, 1.03, 1.01, 0.95, 0.90],
    [0.92, 0.97, 1.05, 1.07, 1.07, 1.05, 0.97, 0.92],
    [0.97, 1.02, 1.09, 1.11, 1.11, 1.09, 1.02, 0.97],
    [1.00, 1.04, 1.09, 1.12, 1.12, 1.09, 1.04, 1.00],
    [1.00, 1.07, 1.09, 1.12, 1.12, 1.09, 1.07, 1.00],
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
];

#[rustfmt::skip]
const PAWN_WHITE_LATE: Table = [
    [1.25, 1.18, 1.06, 1.05, 1.05, 1.06, 1.18, 1.25],
    [1.25, 1.18, 1.06, 1.05, 1.05, 1.06, 1.18, 1.25],
    [1.19, 1.09, 1.02, 1.00, 1.00, 1.02, 1.09, 1.19],
    [1.15, 1.05, 1.00, 1.00, 1.00, 1.00, 1.05, 1.15],
    [1.10, 1.03, 1.00, 0.95, 0.95, 1.00, 1.03, 1.10],
    [1.10, 1.02, 0.97, 0.90, 0.90, 0.97, 1.02, 1.10],
    [1.00, 1.00, 0.95, 0.90, 0.90, 0.95, 1.00, 1.00],
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
];

#[rustfmt::skip]
const PAWN_BLACK_EARLY: Table = [
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    [1.00, 1.07, 1.09, 1.12, 1.12, 1.09, 1.07, 1.00],
    [1.00, 1.04, 1.09, 1.12, 1.12, 1.09, 1.04, 1.00],
    [0.97, 1.02, 1.09, 1.11, 1.11, 1.09, 1.02, 0.97],
    [0.92, 0.97, 1.05, 1.07, 1.07, 1.05, 0.97, 0.92],
    [0.90, 0.95, 1.01, 1.05, 1.05, 1.01, 0.95, 0.90],
    [0.90, 0.95, 1.00, 1.00, 1.00, 1.00, 0.95, 0.90],
    [0.90, 0.95, 1.00, 1.00, 1.00, 1.00, 0.95, 0.90],
];

#[rustfmt::skip]
const PAWN_BLACK_LATE: Table = [
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    [1.00, 1.00, 0.95, 0.90, 0.90, 0.95, 1.00, 1.00],
    [1.10, 1.02, 0.97, 0.90, 0.90, 0.97, 1.02, 1.10],
    [1.10, 1.03, 1.00, 0.95, 0.95, 1.00, 1.03, 1.10],
    [1.15, 1.05, 1.00, 1.00, 1.00, 1.00, 1.05, 1.15],
    [1.19, 1.09, 1.02, 1.00, 1.00, 1.02, 1.09, 1.19],
    [1.25, 1.18, 1.06, 1.05, 1.05, 1.06, 1.18, 1.25],
    [1.25, 1.18, 1.06, 1.05, 1.05, 1.06, 1.18, 1.25],
];

/// Favors the two long diagonals.
#[rustfmt::skip]
const BISHOP_POSITION: Table = [
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.00, 1.20, 1.00, 1.00, 1.00, 1.00, 1.20, 1.00],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.00, 1.20, 1.00, 1.00, 1.00, 1.00, 1.20, 1.00],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
];

/// Base value of a piece kind.
#[inline]
pub fn piece_weight(kind: PieceKind) -> f32 {
    match kind {
        PieceKind::Pawn => PAWN_WEIGHT,
        PieceKind::Knight => KNIGHT_WEIGHT,
        PieceKind::Bishop => BISHOP_WEIGHT,
        PieceKind::Rook => ROOK_WEIGHT,
        PieceKind::Queen => QUEEN_WEIGHT,
        PieceKind::King => KING_WEIGHT,
    }
}

/// Scores `mv`, played in `prior` and producing `resulting`, for the side
/// that played it. `history` is the game so far, oldest first; only its last
/// `REPEAT_WINDOW` entries are read.
///
/// Pure: the same inputs always give the same bits.
pub fn evaluate(prior: &Position, resulting: &Position, mv: Move, history: &[Move]) -> f32 {
    let mover = prior.side_to_move;
    capture_term(prior, resulting, mv, mover)
        + king_ratio_term(resulting, mover)
        + mobility_term(resulting, mv, history, mover)
        + material_term(resulting, mv, mover)
}

fn capture_term(prior: &Position, resulting: &Position, mv: Move, mover: Color) -> f32 {
    let (Some(victim), Some(attacker)) = (prior.piece_at(mv.to), prior.piece_at(mv.from)) else {
        return 0.0;
    };
    if victim.color == mover {
        return 0.0;
    }
    let gain = piece_weight(victim.kind) / piece_weight(attacker.kind);
    if is_attacked(resulting, mv.to, mover) {
        gain * EXPOSED_CAPTURE_FACTOR
    } else {
        gain
    }
}

fn king_ratio_term(resulting: &Position, mover: Color) -> f32 {
    let own = resulting.piece_counts(mover);
    let enemy = resulting.piece_counts(mover.other());

    // A missing enemy king stands in for mate.
    let king_gone = if enemy[PieceKind::King.idx()] == 0 { 1.0 } else { 0.0 };
    let own_total: u32 = own.iter().sum();
    let enemy_total: u32 = enemy.iter().sum();
    king_gone + own_total as f32 / enemy_total.max(1) as f32
}

fn mobility_term(resulting: &Position, mv: Move, history: &[Move], mover: Color) -> f32 {
    // Plain piece reach: no castling, no en passant.
    let mut view = resulting.with_side_to_move(mover);
    view.castling = CastlingRights::default();
    view.en_passant = None;
    let reach = legal_moves(&view).len() as f32;
    let recent = &history[history.len().saturating_sub(REPEAT_WINDOW)..];
    let repeats = recent.iter().filter(|&&m| m == mv).count() as f32;
    reach * MOBILITY_WEIGHT - repeats
}

fn material_term(pos: &Position, mv: Move, mover: Color) -> f32 {
    let own = pos.piece_counts(mover);
    let enemy = pos.piece_counts(mover.other());
    let on_board: u32 = own.iter().chain(enemy.iter()).sum();
    let early = on_board > EARLY_PHASE_PIECES;

    let mut sum = mv.promo.map_or(0.0, piece_weight);
    for (sq, pc) in pos.pieces() {
        if pc.kind == PieceKind::King {
            continue;
        }
        sum += if pc.color == mover {
            placed_value(pos, sq, pc, early)
        } else {
            piece_weight(pc.kind)
        };
    }

    if early && own[PieceKind::Bishop.idx()] == 2 {
        sum += PAIR_BONUS;
    }
    if !early && own[PieceKind::Rook.idx()] == 2 {
        sum += PAIR_BONUS;
    }

    let nominal: f32 = PieceKind::ALL
        .iter()
        .filter(|&&k| k != PieceKind::King)
        .map(|&k| own[k.idx()] as f32 * piece_weight(k))
        .sum();
    if nominal == 0.0 {
        return 0.0;
    }
    2.0 * sum / nominal
}

/// Value of one of the mover's pieces with its placement bonuses.
fn placed_value(pos: &Position, sq: Square, pc: Piece, early: bool) -> f32 {
    let base = piece_weight(pc.kind);
    let (row, col) = (sq.row as usize, sq.col as usize);
    match pc.kind {
        PieceKind::Pawn => {
            let table = match (pc.color, early) {
                (Color::White, true) => &PAWN_WHITE_EARLY,
                (Color::White, false) => &PAWN_WHITE_LATE,
                (Color::Black, true) => &PAWN_BLACK_EARLY,
                (Color::Black, false) => &PAWN_BLACK_LATE,
            };
            (base + pawn_structure(pos, sq, pc.color)) * table[row][col]
        }
        PieceKind::Bishop => {
            let bonus = if early { EARLY_BISHOP_BONUS } else { 0.0 };
            base * BISHOP_POSITION[row][col] + bonus
        }
        PieceKind::Rook if !early => base + LATE_ROOK_BONUS,
        _ => base,
    }
}

/// Doubled-pawn penalty plus the bonus for diagonal supporters behind.
fn pawn_structure(pos: &Position, sq: Square, color: Color) -> f32 {
    let pawn = Some(Piece::new(color, PieceKind::Pawn));
    let ahead = color.forward();
    let holds_pawn = |target: Option<Square>| target.is_some_and(|s| pos.piece_at(s) == pawn);

    let doubled = if holds_pawn(sq.offset(ahead, 0)) {
        DOUBLED_PAWN
    } else {
        0.0
    };
    let supporters = [-1, 1]
        .into_iter()
        .filter(|&dcol| holds_pawn(sq.offset(-ahead, dcol)))
        .count();
    let chain = match supporters {
        2 => PAWN_CHAIN_BOTH,
        1 => PAWN_CHAIN_ONE,
        _ => 0.0,
    };
    doubled + chain
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
