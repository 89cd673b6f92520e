use super::*;

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

fn sq(s: &str) -> Square {
    Square::from_coord(s).unwrap()
}

#[test]
fn test_pawn_attacks_diagonally_forward() {
    // White pawn on e4 attacks d5 and f5, not e5.
    let pos = fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("d5"), Color::Black));
    assert!(is_attacked(&pos, sq("f5"), Color::Black));
    assert!(!is_attacked(&pos, sq("e5"), Color::Black));
    assert!(!is_attacked(&pos, sq("d3"), Color::Black));

    // Black pawn on d5 attacks c4 and e4.
    let pos = fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("c4"), Color::White));
    assert!(is_attacked(&pos, sq("e4"), Color::White));
    assert!(!is_attacked(&pos, sq("c6"), Color::White));
}

#[test]
fn test_knight_attacks() {
    let pos = fen("4k3/8/8/8/4N3/8/8/8 w - - 0 1");
    let hits = Square::all()
        .filter(|&s| is_attacked(&pos, s, Color::Black))
        .count();
    assert_eq!(hits, 8);
}

#[test]
fn test_sliders_stop_at_first_blocker() {
    let pos = fen("4k3/8/8/8/R2p3r/8/8/4K3 w - - 0 1");
    // White rook a4 sees b4, c4, d4 (the blocker) but not e4.
    assert!(is_attacked(&pos, sq("c4"), Color::Black));
    assert!(is_attacked(&pos, sq("d4"), Color::Black));
    assert!(!is_attacked(&pos, sq("e4"), Color::Black));
    // Black rook h4 sees back to the pawn.
    assert!(is_attacked(&pos, sq("e4"), Color::White));
}

#[test]
fn test_queen_covers_both_ray_kinds() {
    let pos = fen("4k3/8/8/8/3q4/8/8/K7 w - - 0 1");
    assert!(is_attacked(&pos, sq("d1"), Color::White));
    assert!(is_attacked(&pos, sq("h8"), Color::White));
    assert!(is_attacked(&pos, sq("a7"), Color::White));
    assert!(!is_attacked(&pos, sq("e2"), Color::White));
}

#[test]
fn test_bishop_does_not_attack_orthogonally() {
    let pos = fen("4k3/8/8/8/3B4/8/8/K7 w - - 0 1");
    assert!(is_attacked(&pos, sq("g7"), Color::Black));
    assert!(!is_attacked(&pos, sq("d7"), Color::Black));
}

#[test]
fn test_king_attacks_neighbours() {
    let pos = fen("8/8/8/8/8/8/8/K6k w - - 0 1");
    assert!(is_attacked(&pos, sq("b2"), Color::Black));
    assert!(is_attacked(&pos, sq("g2"), Color::White));
    assert!(!is_attacked(&pos, sq("c3"), Color::Black));
}

#[test]
fn test_own_pieces_do_not_attack() {
    let pos = fen("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    // Asking whether White is attacked ignores White's own knight.
    assert!(!is_attacked(&pos, sq("f6"), Color::White));
}

#[test]
fn test_in_check() {
    let pos = fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
    assert!(in_check(&pos, Color::White));
    assert!(!in_check(&pos, Color::Black));
}

#[test]
fn test_in_check_without_king() {
    let pos = fen("8/8/8/8/8/8/8/3qr3 w - - 0 1");
    assert!(!in_check(&pos, Color::White));
}
