use crate::attacks::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS, in_check, is_attacked};
use crate::board::{CASTLES, Position};
use crate::types::*;

/// Ordering seed given to castling moves at generation time.
pub const CASTLING_SEED: f32 = 1.5;

/// A generated move and the heuristic value used to order it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub value: f32,
}

impl ScoredMove {
    pub fn new(mv: Move) -> Self {
        Self { mv, value: 0.0 }
    }
}

pub type MoveList = Vec<ScoredMove>;

/// Stable sort, highest value first. Ties keep generation order.
pub fn sort_best_first(moves: &mut MoveList) {
    moves.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Generate all legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> MoveList {
    filter_legal(pos, pseudo_moves(pos))
}

/// Drops every candidate that leaves the mover's king attacked. Castling and
/// en passant go through the same `apply` as every other move.
pub fn filter_legal(pos: &Position, candidates: MoveList) -> MoveList {
    let mover = pos.side_to_move;
    candidates
        .into_iter()
        .filter(|cand| !in_check(&pos.apply(cand.mv), mover))
        .collect()
}

/// Moves that follow the piece rules without regard to the mover's king.
pub fn pseudo_moves(pos: &Position) -> MoveList {
    let mut out = Vec::with_capacity(64);
    let c = pos.side_to_move;

    for (from, pc) in pos.pieces() {
        if pc.color != c {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, c, &mut out),
            PieceKind::Knight => gen_steps(pos, from, c, &mut out, &KNIGHT_OFFSETS, false),
            PieceKind::Bishop => gen_slider(pos, from, c, &mut out, &BISHOP_DIRS),
            PieceKind::Rook => gen_slider(pos, from, c, &mut out, &ROOK_DIRS),
            PieceKind::Queen => {
                gen_slider(pos, from, c, &mut out, &ROOK_DIRS);
                gen_slider(pos, from, c, &mut out, &BISHOP_DIRS);
            }
            PieceKind::King => gen_steps(pos, from, c, &mut out, &KING_OFFSETS, true),
        }
    }

    gen_castle(pos, c, &mut out);
    gen_en_passant(pos, c, &mut out);
    out
}

fn push_pawn_move(from: Square, to: Square, c: Color, out: &mut MoveList) {
    if to.row == c.promotion_row() {
        for pk in PieceKind::PROMOTIONS {
            out.push(ScoredMove::new(Move::promoting(from, to, pk)));
        }
    } else {
        out.push(ScoredMove::new(Move::new(from, to)));
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut MoveList) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row
    if let Some(to) = from.offset(dir, 0)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);

        if from.row == c.pawn_start_row()
            && let Some(to2) = to.offset(dir, 0)
            && pos.piece_at(to2).is_none()
        {
            out.push(ScoredMove::new(Move::new(from, to2)));
        }
    }

    // diagonal captures
    for dcol in [-1, 1] {
        if let Some(to) = from.offset(dir, dcol)
            && let Some(target) = pos.piece_at(to)
            && target.color != c
        {
            push_pawn_move(from, to, c, out);
        }
    }
}

/// Single-step pieces. A king may not step onto the enemy king's square.
fn gen_steps(
    pos: &Position,
    from: Square,
    c: Color,
    out: &mut MoveList,
    offsets: &[(i8, i8)],
    spares_king: bool,
) {
    for &(drow, dcol) in offsets {
        if let Some(to) = from.offset(drow, dcol) {
            match pos.piece_at(to) {
                None => out.push(ScoredMove::new(Move::new(from, to))),
                Some(pc) if pc.color != c && !(spares_king && pc.kind == PieceKind::King) => {
                    out.push(ScoredMove::new(Move::new(from, to)))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut MoveList, dirs: &[(i8, i8)]) {
    for &(drow, dcol) in dirs {
        let mut cur = from.offset(drow, dcol);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(ScoredMove::new(Move::new(from, to))),
                Some(pc) if pc.color != c => {
                    out.push(ScoredMove::new(Move::new(from, to)));
                    break;
                }
                _ => break,
            }
            cur = to.offset(drow, dcol);
        }
    }
}

fn gen_castle(pos: &Position, c: Color, out: &mut MoveList) {
    for castle in CASTLES.iter().filter(|castle| castle.color == c) {
        if !pos.castling.allows(c, castle.side)
            || pos.piece_at(castle.king_from) != Some(Piece::new(c, PieceKind::King))
            || pos.piece_at(castle.rook_from) != Some(Piece::new(c, PieceKind::Rook))
            || castle.between.iter().any(|&sq| pos.piece_at(sq).is_some())
        {
            continue;
        }

        // Can't castle out of check.
        if is_attacked(pos, castle.king_from, c) {
            continue;
        }

        // Transit and landing squares are tested in the position after castling.
        let mv = castle.as_move();
        let after = pos.apply(mv);
        if castle.transit.iter().any(|&sq| is_attacked(&after, sq, c)) {
            continue;
        }

        out.push(ScoredMove {
            mv,
            value: CASTLING_SEED,
        });
    }
}

fn gen_en_passant(pos: &Position, c: Color, out: &mut MoveList) {
    let Some(target) = pos.en_passant else {
        return;
    };
    let pawn = Piece::new(c, PieceKind::Pawn);
    // Capturing pawns stand diagonally one row back from the target.
    for dcol in [-1, 1] {
        if let Some(from) = target.offset(-c.forward(), dcol)
            && pos.piece_at(from) == Some(pawn)
            && pos.piece_at(target).is_none()
        {
            out.push(ScoredMove::new(Move::new(from, target)));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
