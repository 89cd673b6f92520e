//! Minimax Engine
//!
//! Picks one move per turn: an opening-table move when one applies, otherwise
//! the best move found by time-bounded iterative-deepening minimax over a
//! positional evaluation.

mod config;
mod error;
mod eval;
mod opening;
mod search;

use chess_core::{Engine, Move, Position, SearchLimits, SearchResult, legal_moves};
use tracing::{debug, info, warn};

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use eval::{evaluate, piece_weight};
pub use opening::{BookEntry, BookMove, Matcher, OpeningBook};
pub use search::{
    NodeValue, SearchContext, SearchOutcome, iterative_deepening, minimax, search_depth,
};

/// Decision engine for one side of a game.
///
/// Holds no per-game state; every call works from the position and history
/// it is given.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    config: EngineConfig,
    book: &'static OpeningBook,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            book: OpeningBook::standard(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Chooses a move for the side to move in `pos`.
    ///
    /// Fails with [`EngineError::NoLegalMoves`] on checkmate or stalemate.
    pub fn decide(
        &self,
        pos: &Position,
        history: &[Move],
        limits: SearchLimits,
    ) -> EngineResult<SearchResult> {
        let moves = legal_moves(pos);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        if let Some(book) = self.book_move(pos, history) {
            if moves.iter().any(|m| m.mv == book.mv) {
                info!(mv = %book.mv, line = book.line, "playing opening table move");
                return Ok(SearchResult {
                    best_move: Some(book.mv),
                    score: 0.0,
                    depth: 0,
                    nodes: 0,
                    from_book: true,
                });
            }
            warn!(mv = %book.mv, line = book.line, "opening table move is not legal here, searching");
        }

        let outcome = iterative_deepening(pos, moves, history, limits, self.config.alpha_beta)?;
        info!(
            mv = %outcome.best_move,
            score = outcome.value,
            depth = outcome.depth,
            nodes = outcome.nodes,
            "search chose move"
        );
        Ok(SearchResult {
            best_move: Some(outcome.best_move),
            score: outcome.value,
            depth: outcome.depth,
            nodes: outcome.nodes,
            from_book: false,
        })
    }

    fn book_move(&self, pos: &Position, history: &[Move]) -> Option<BookMove> {
        if !self.config.use_opening_book || pos.fullmove_number > self.config.opening_book_max_turn {
            return None;
        }
        self.book.lookup(pos.fullmove_number, pos.side_to_move, history)
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, history: &[Move], limits: SearchLimits) -> SearchResult {
        match self.decide(pos, history, limits) {
            Ok(result) => result,
            Err(err) => {
                debug!(%err, "no move to return");
                SearchResult::none()
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}
