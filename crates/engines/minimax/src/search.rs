//! Iterative-deepening minimax with alpha-beta pruning.
//!
//! Every node derives fresh child positions with `Position::apply`; nothing
//! is shared or mutated across the tree. Leaves are scored with
//! [`evaluate`], always from the point of view of the side that made the
//! last move, while the maximizing flag alternates between plies.

use chess_core::{Move, MoveList, Position, SearchLimits, TimeControl, legal_moves, sort_best_first};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::eval::evaluate;

/// What a search call hands back to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeValue {
    /// Best move at this node. None at leaves.
    pub best_move: Option<Move>,
    pub value: f32,
    /// Nodes visited in this subtree, this one included
    pub nodes: u64,
    /// True if some line in the subtree ran all the way to depth 0
    pub reached_horizon: bool,
}

impl NodeValue {
    fn leaf(value: f32, reached_horizon: bool) -> Self {
        Self {
            best_move: None,
            value,
            nodes: 1,
            reached_horizon,
        }
    }

    fn open(maximizing: bool) -> Self {
        Self {
            best_move: None,
            value: if maximizing {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            },
            nodes: 1,
            reached_horizon: false,
        }
    }

    /// Folds a child's result in; returns true if it became the best so far.
    fn absorb(&mut self, mv: Move, child: &NodeValue, maximizing: bool) -> bool {
        self.nodes += child.nodes;
        self.reached_horizon |= child.reached_horizon;

        let better = if maximizing {
            child.value > self.value
        } else {
            child.value < self.value
        };
        if better {
            self.best_move = Some(mv);
            self.value = child.value;
        }
        better
    }
}

/// Read-only inputs shared by every node of one decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    /// Moves played in the game before the root, oldest first
    pub history: &'a [Move],
    pub alpha_beta: bool,
}

/// Result of iterative deepening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub value: f32,
    /// Deepest completed pass
    pub depth: u8,
    /// Nodes visited over all passes
    pub nodes: u64,
}

/// A node is cut off when it has no moves, or when it is quiet: the move
/// that led here did not capture and the side to move is not in check.
fn is_cutoff(current: &Position, prior: &Position, led_here: Move, moves: &MoveList) -> bool {
    if moves.is_empty() {
        return true;
    }
    prior.piece_at(led_here.to).is_none() && !current.in_check(current.side_to_move)
}

/// Recursive minimax below the root.
///
/// `prior` is the parent position and `led_here` the move that turned it
/// into `current`; both feed the evaluation at leaves.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    current: &Position,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    maximizing: bool,
    prior: &Position,
    led_here: Move,
    ctx: &SearchContext<'_>,
) -> NodeValue {
    let mut moves = legal_moves(current);

    if is_cutoff(current, prior, led_here, &moves) {
        return NodeValue::leaf(evaluate(prior, current, led_here, ctx.history), false);
    }
    if depth == 0 {
        return NodeValue::leaf(evaluate(prior, current, led_here, ctx.history), true);
    }

    sort_best_first(&mut moves);

    let mut best = NodeValue::open(maximizing);
    for scored in &moves {
        let child = current.apply(scored.mv);
        let reply = minimax(
            &child,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            current,
            scored.mv,
            ctx,
        );

        if best.absorb(scored.mv, &reply, maximizing) {
            if maximizing {
                alpha = alpha.max(best.value);
            } else {
                beta = beta.min(best.value);
            }
        }

        if ctx.alpha_beta && beta <= alpha {
            break; // cutoff
        }
    }

    best
}

/// One full pass at `depth` from the root, maximizing.
///
/// Each root move's value is written back into `moves`, so the next pass
/// visits them best-first.
pub fn search_depth(
    root: &Position,
    moves: &mut MoveList,
    depth: u8,
    ctx: &SearchContext<'_>,
) -> NodeValue {
    sort_best_first(moves);

    let mut alpha = f32::NEG_INFINITY;
    let beta = f32::INFINITY;
    let mut best = NodeValue::open(true);

    for scored in moves.iter_mut() {
        let child = root.apply(scored.mv);
        let reply = minimax(
            &child,
            depth.saturating_sub(1),
            alpha,
            beta,
            false,
            root,
            scored.mv,
            ctx,
        );
        scored.value = reply.value;

        if best.absorb(scored.mv, &reply, true) {
            alpha = alpha.max(best.value);
        }
    }

    if best.best_move.is_none() {
        best.best_move = moves.first().map(|m| m.mv);
    }
    best
}

/// Runs passes at depth 1, 2, 3, ... until the clock runs out, `max_depth`
/// is reached, or a pass ends without touching its horizon. The clock is
/// read only between passes, so the depth-1 result is always available.
pub fn iterative_deepening(
    root: &Position,
    mut moves: MoveList,
    history: &[Move],
    limits: SearchLimits,
    alpha_beta: bool,
) -> EngineResult<SearchOutcome> {
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let clock = TimeControl::start(limits.move_time);
    let ctx = SearchContext {
        history,
        alpha_beta,
    };
    let max_depth = limits.max_depth.max(1);

    let mut depth = 1;
    let mut pass = search_depth(root, &mut moves, depth, &ctx);
    let mut nodes = pass.nodes;
    log_pass(depth, &pass, &clock);

    while depth < max_depth && pass.reached_horizon && !clock.is_expired() {
        depth += 1;
        pass = search_depth(root, &mut moves, depth, &ctx);
        nodes += pass.nodes;
        log_pass(depth, &pass, &clock);
    }

    let best_move = pass.best_move.ok_or(EngineError::NoLegalMoves)?;
    Ok(SearchOutcome {
        best_move,
        value: pass.value,
        depth,
        nodes,
    })
}

fn log_pass(depth: u8, pass: &NodeValue, clock: &TimeControl) {
    debug!(
        depth,
        score = pass.value,
        best = %pass.best_move.map(|m| m.to_string()).unwrap_or_default(),
        nodes = pass.nodes,
        horizon = pass.reached_horizon,
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "completed pass"
    );
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
