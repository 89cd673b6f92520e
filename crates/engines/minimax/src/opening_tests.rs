use super::*;
use chess_core::parse_history;

fn history(moves: &[&str]) -> Vec<Move> {
    parse_history(moves.iter().copied()).unwrap()
}

fn lookup(turn: u32, side: Color, moves: &[&str]) -> Option<String> {
    OpeningBook::standard()
        .lookup(turn, side, &history(moves))
        .map(|b| b.mv.to_string())
}

#[test]
fn test_sicilian_reply_to_kings_pawn() {
    assert_eq!(lookup(1, Color::Black, &["e2e4"]).as_deref(), Some("c7c5"));
}

#[test]
fn test_first_move_as_white() {
    let book = OpeningBook::standard().lookup(1, Color::White, &[]).unwrap();
    assert_eq!(book.mv, Move::literal("e2e4"));
    assert_eq!(book.line, "Italian Game");
}

#[test]
fn test_white_follows_matching_line() {
    assert_eq!(
        lookup(2, Color::White, &["e2e4", "e7e5"]).as_deref(),
        Some("g1f3")
    );
    assert_eq!(
        lookup(2, Color::White, &["e2e4", "c7c5"]).as_deref(),
        Some("d2d4")
    );
}

#[test]
fn test_later_line_takes_over_after_divergence() {
    let book = OpeningBook::standard()
        .lookup(
            4,
            Color::White,
            &history(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]),
        )
        .unwrap();
    assert_eq!(book.mv, Move::literal("f3g5"));
    assert_eq!(book.line, "Fried Liver Attack");
}

#[test]
fn test_scholars_mate_reaction() {
    assert_eq!(
        lookup(2, Color::Black, &["e2e4", "e7e5", "d1h5"]).as_deref(),
        Some("g7g6")
    );
    assert_eq!(
        lookup(2, Color::Black, &["e2e3", "b7b6", "f1c4"]).as_deref(),
        Some("g7g6")
    );
    // Same pattern, wrong turn.
    assert_eq!(lookup(3, Color::Black, &["e2e4", "e7e5", "d1h5"]), None);
}

#[test]
fn test_black_counter_lines() {
    assert_eq!(lookup(1, Color::Black, &["d2d4"]).as_deref(), Some("d7d5"));
    assert_eq!(
        lookup(3, Color::Black, &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3"]).as_deref(),
        Some("g8f6")
    );
    assert_eq!(
        lookup(6, Color::Black, &[
            "f2f4", "e7e5", "f4e5", "d7d6", "e5d6", "f8d6", "d2d4", "d8h4", "g2g3", "d6g3", "e1d2"
        ])
        .as_deref(),
        Some("h4d4")
    );
}

#[test]
fn test_no_match_falls_through() {
    assert_eq!(lookup(1, Color::Black, &["a2a3"]), None);
    assert_eq!(lookup(2, Color::White, &["d2d4", "d7d5"]), None);
}

#[test]
fn test_line_exhausted() {
    let italian = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "d2d3", "g8f6"];
    assert_eq!(lookup(5, Color::White, &italian), None);
}

#[test]
fn test_short_history_is_not_indexed() {
    // Turn 3 needs four plies of history; two are not enough for any line.
    assert_eq!(lookup(3, Color::White, &["e2e4", "e7e5"]), None);
    assert_eq!(lookup(2, Color::Black, &["e2e4"]), None);
    assert_eq!(lookup(1, Color::Black, &[]), None);
}
