//! Time control and search limits for chess engines.
//!
//! A decision gets a wall-clock budget carved out of the caller's remaining
//! time. The budget is only consulted between completed search passes, so
//! nothing here needs to be shared across threads.

use std::time::{Duration, Instant};

/// Search limits that control when an engine should stop deepening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    /// Deepest iterative-deepening pass allowed, in plies
    pub max_depth: u8,
    /// Wall-clock budget for this move (None = infinite)
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            move_time: None,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(max_depth: u8, move_time: Duration) -> Self {
        Self {
            max_depth,
            move_time: Some(move_time),
        }
    }

    /// Spend `fraction` of the caller's remaining time on this move.
    ///
    /// The fraction is clamped to `[0, 1]`; NaN spends nothing.
    pub fn from_remaining(remaining: Duration, fraction: f64, max_depth: u8) -> Self {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let budget = Duration::try_from_secs_f64(remaining.as_secs_f64() * fraction)
            .unwrap_or(remaining);
        Self::depth_and_time(max_depth, budget)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Wall clock for one decision.
#[derive(Debug, Clone, Copy)]
pub struct TimeControl {
    /// Start time of the search
    start_time: Instant,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Start the clock now.
    pub fn start(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
        }
    }

    /// True once the budget is spent. Never true without a limit.
    pub fn is_expired(&self) -> bool {
        self.time_limit
            .is_some_and(|limit| self.start_time.elapsed() >= limit)
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
