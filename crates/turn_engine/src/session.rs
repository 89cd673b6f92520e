//! Line protocol state for one game.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chess_core::{Move, Position, legal_moves, parse_history, sorted_notation};
use minimax_engine::{EngineError, MinimaxEngine};
use tracing::{debug, warn};

/// Remaining time assumed until the caller sends one.
pub const DEFAULT_REMAINING: Duration = Duration::from_secs(900);

/// What the caller should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print on stdout, possibly none
    Lines(Vec<String>),
    Quit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }

    fn silent() -> Self {
        Reply::Lines(Vec::new())
    }
}

pub struct Session {
    engine: MinimaxEngine,
    position: Position,
    history: Vec<Move>,
    remaining: Duration,
}

impl Session {
    pub fn new(engine: MinimaxEngine) -> Self {
        Self {
            engine,
            position: Position::startpos(),
            history: Vec::new(),
            remaining: DEFAULT_REMAINING,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[cfg(test)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Runs one command line. Errors leave the session unchanged.
    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Reply::silent());
        };

        match command {
            "position" => {
                let text = args.join(" ");
                self.position = Position::from_fen(&text)
                    .with_context(|| format!("invalid position '{text}'"))?;
                Ok(Reply::silent())
            }
            "history" => {
                self.history = parse_history(args.iter().copied()).context("invalid history")?;
                Ok(Reply::silent())
            }
            "time" => {
                let Some(ms) = args.first() else {
                    bail!("time needs a value in milliseconds");
                };
                let ms: u64 = ms
                    .parse()
                    .with_context(|| format!("invalid time '{ms}'"))?;
                self.remaining = Duration::from_millis(ms);
                Ok(Reply::silent())
            }
            "go" => self.go(),
            "moves" => {
                let moves = legal_moves(&self.position);
                let listed = sorted_notation(moves.iter().map(|m| m.mv));
                Ok(Reply::Lines(vec![listed.len().to_string(), listed.join(" ")]))
            }
            "board" => Ok(Reply::Lines(
                self.position.to_string().lines().map(str::to_string).collect(),
            )),
            "fen" => Ok(Reply::line(self.position.to_fen())),
            "quit" => Ok(Reply::Quit),
            other => {
                debug!(command = other, "ignoring unknown command");
                Ok(Reply::silent())
            }
        }
    }

    fn go(&self) -> Result<Reply> {
        let limits = self.engine.config().limits(self.remaining);
        match self.engine.decide(&self.position, &self.history, limits) {
            Ok(result) => match result.best_move {
                Some(mv) => Ok(Reply::line(format!("bestmove {mv}"))),
                None => Ok(Reply::line("bestmove none")),
            },
            Err(EngineError::NoLegalMoves) => {
                let mover = self.position.side_to_move;
                if self.position.in_check(mover) {
                    warn!(?mover, "checkmate, no move to play");
                } else {
                    warn!(?mover, "stalemate, no move to play");
                }
                Ok(Reply::line("bestmove none"))
            }
            Err(err) => Err(err).context("search failed"),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
