//! ナイト移動 Isolation の対戦探索エンジン
//!
//! 与えられた局面から、持ち時間内で最善と判断した手を選ぶ。
//!
//! - [`search::Minimax`]: 固定深さ minimax
//! - [`search::AlphaBeta`] + [`search::iterative_deepening`]: 反復深化 alpha-beta（anytime）
//! - [`eval`]: 差し替え可能な静的評価
//! - [`agent`]: 対局ハーネス向けの入口（時間切れを回収して必ず手を返す）
//!
//! 局面は [`position::Position`] トレイト越しに扱い、参照実装として [`position::Board`] を持つ。

pub mod agent;
pub mod eval;
pub mod position;
pub mod search;
pub mod types;

pub use agent::{Agent, AlphaBetaPlayer, MinimaxPlayer, RandomPlayer};
pub use eval::{EvalPolicy, Evaluator};
pub use position::{Board, Position};
pub use search::{Clock, Countdown, SearchConfig, SearchTimeout};
pub use types::{Move, MoveList, Player, Score};
