//! 探索
//!
//! - [`Minimax`]: 固定深さ minimax（枝刈りなし）
//! - [`AlphaBeta`]: alpha-beta minimax
//! - [`iterative_deepening`]: alpha-beta の反復深化（anytime）
//!
//! どの探索も `Deadline` で残り時間を監視し、時間切れは `SearchTimeout` として返す。

mod alpha_beta;
mod config;
mod deadline;
mod iterative;
mod minimax;
mod search_helpers;
mod stats;

#[cfg(test)]
mod tests;

pub use alpha_beta::AlphaBeta;
pub use config::{ConfigError, DEFAULT_SEARCH_DEPTH, DEFAULT_TIMEOUT_MS, SearchConfig};
pub use deadline::{Clock, Countdown, Deadline, SearchTimeout};
pub use iterative::{IterativeOutcome, iterative_deepening};
pub use minimax::Minimax;
pub use stats::SearchStats;
