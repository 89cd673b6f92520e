use super::*;
use std::time::Duration;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

fn ctx(alpha_beta: bool) -> SearchContext<'static> {
    SearchContext {
        history: &[],
        alpha_beta,
    }
}

fn pass(pos: &Position, depth: u8, alpha_beta: bool) -> NodeValue {
    let mut moves = legal_moves(pos);
    search_depth(pos, &mut moves, depth, &ctx(alpha_beta))
}

#[test]
fn test_pruning_matches_exhaustive_minimax() {
    let positions = [
        KIWIPETE,
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ];
    for text in positions {
        let pos = fen(text);
        for depth in 1..=3 {
            let pruned = pass(&pos, depth, true);
            let full = pass(&pos, depth, false);
            assert_eq!(
                pruned.best_move, full.best_move,
                "best move differs at depth {depth} for {text}"
            );
            assert_eq!(pruned.value.to_bits(), full.value.to_bits());
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn test_pass_records_root_values() {
    let pos = fen(KIWIPETE);
    let mut moves = legal_moves(&pos);
    let best = search_depth(&pos, &mut moves, 1, &ctx(true));

    // Depth 1 visits every root child, so each value is its evaluation.
    for scored in &moves {
        let child = pos.apply(scored.mv);
        assert_eq!(scored.value, evaluate(&pos, &child, scored.mv, &[]));
    }
    let top = moves
        .iter()
        .map(|m| m.value)
        .fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(best.value, top);

    // The next pass starts from the best-valued move.
    sort_best_first(&mut moves);
    assert_eq!(Some(moves[0].mv), best.best_move);
}

#[test]
fn test_quiet_root_children_stop_deepening() {
    // Every opening move is a quiet non-capture, so depth 1 never reaches
    // its horizon and there is nothing deeper to search.
    let pos = Position::startpos();
    let outcome = iterative_deepening(&pos, legal_moves(&pos), &[], SearchLimits::depth(64), true).unwrap();
    assert_eq!(outcome.depth, 1);
    assert_eq!(outcome.nodes, 21);
}

#[test]
fn test_deepening_respects_max_depth() {
    let pos = fen(KIWIPETE);
    let outcome = iterative_deepening(&pos, legal_moves(&pos), &[], SearchLimits::depth(2), true).unwrap();
    assert!(outcome.depth <= 2);
    assert!(legal_moves(&pos).iter().any(|m| m.mv == outcome.best_move));
}

#[test]
fn test_expired_budget_still_returns_depth_one() {
    let pos = fen(KIWIPETE);
    let limits = SearchLimits::depth_and_time(64, Duration::ZERO);
    let outcome = iterative_deepening(&pos, legal_moves(&pos), &[], limits, true).unwrap();
    assert_eq!(outcome.depth, 1);
    assert!(legal_moves(&pos).iter().any(|m| m.mv == outcome.best_move));
}

#[test]
fn test_no_moves_is_an_error() {
    let mate = fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let result = iterative_deepening(&mate, legal_moves(&mate), &[], SearchLimits::depth(3), true);
    assert!(matches!(result, Err(EngineError::NoLegalMoves)));
}

#[test]
fn test_search_is_deterministic() {
    let pos = fen(KIWIPETE);
    let history = [Move::literal("e2e4"), Move::literal("e7e6")];
    let a = iterative_deepening(&pos, legal_moves(&pos), &history, SearchLimits::depth(3), true).unwrap();
    let b = iterative_deepening(&pos, legal_moves(&pos), &history, SearchLimits::depth(3), true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_leaf_at_quiet_node() {
    let root = Position::startpos();
    let mv = Move::literal("g1f3");
    let child = root.apply(mv);
    let node = minimax(
        &child,
        5,
        f32::NEG_INFINITY,
        f32::INFINITY,
        false,
        &root,
        mv,
        &ctx(true),
    );
    assert_eq!(node.best_move, None);
    assert_eq!(node.nodes, 1);
    assert!(!node.reached_horizon);
    assert_eq!(node.value, evaluate(&root, &child, mv, &[]));
}

#[test]
fn test_capture_keeps_searching() {
    // A capture is never quiet, so the reply gets searched.
    let root = fen("4k3/8/2p5/3q4/4P3/8/8/4K3 w - - 0 1");
    let mv = Move::literal("e4d5");
    let child = root.apply(mv);
    let node = minimax(
        &child,
        1,
        f32::NEG_INFINITY,
        f32::INFINITY,
        false,
        &root,
        mv,
        &ctx(true),
    );
    assert!(node.best_move.is_some());
    assert!(node.nodes > 1);
}
