//! isolation エージェントの対局ツール群
//!
//! - [`game`]: 1局の進行と反則判定
//! - [`roster`]: エージェント定義と TOML 設定
//! - [`tournament`]: 総当たりの並列実行と集計

pub mod game;
pub mod roster;
pub mod tournament;

pub use game::{EndReason, GameResult, MoveRecord, play_game};
pub use roster::{AgentKind, AgentSpec, TournamentConfig, default_roster};
pub use tournament::{MatchResult, MatchTicket, Standings, run_tournament, schedule};
