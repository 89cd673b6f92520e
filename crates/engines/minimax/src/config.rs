//! Engine settings, loadable from a TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chess_core::SearchLimits;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Share of the remaining time spent on one decision
    pub time_fraction: f64,
    /// Ceiling for iterative deepening, in plies
    pub max_depth: u8,
    pub use_opening_book: bool,
    /// Last fullmove number the opening table is consulted for
    pub opening_book_max_turn: u32,
    /// Prune with alpha-beta. Off gives exhaustive minimax in the same move order.
    pub alpha_beta: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_fraction: 0.022,
            max_depth: 64,
            use_opening_book: true,
            opening_book_max_turn: 10,
            alpha_beta: true,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(text)?;
        if !(0.0..=1.0).contains(&config.time_fraction) {
            return Err(EngineError::TimeFraction(config.time_fraction));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Limits for one decision given the caller's remaining time.
    pub fn limits(&self, remaining: Duration) -> SearchLimits {
        SearchLimits::from_remaining(remaining, self.time_fraction, self.max_depth)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
