pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::{NotationError, NotationResult};
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: one decision per call, driven by the turn client
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if there are no legal moves)
    pub best_move: Option<Move>,
    /// Heuristic value of the chosen move from the mover's perspective
    pub score: f32,
    /// Deepest completed iterative-deepening pass
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// True if the move came from the opening table without searching
    pub from_book: bool,
}

impl SearchResult {
    /// A result with no move, used when the side to move has none.
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
            from_book: false,
        }
    }
}

/// Trait that decision engines implement.
pub trait Engine: Send {
    /// Choose a move for the side to move in `pos`.
    ///
    /// # Arguments
    /// * `pos` - The position to decide in
    /// * `history` - Moves played so far in the game, oldest first
    /// * `limits` - Search limits (depth, time)
    fn search(&mut self, pos: &Position, history: &[Move], limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }
}
