//! 1局の進行
//!
//! 手ごとに新しい `Countdown` を渡してエージェントに着手を選ばせる。
//! 持ち時間超過・非合法手（`Move::NONE` を含む）は即座に負け。
//! 合法手がなくなった手番側も負けで、引き分けは存在しない。

use std::time::Duration;

use isolation_core::{Agent, Board, Countdown, Move, Player, Position};
use log::{debug, warn};
use serde::Serialize;

/// 終局理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// 手番側に合法手がない
    NoLegalMoves,
    /// 持ち時間を超過した
    Timeout,
    /// 非合法手または着手なしを返した
    IllegalMove,
}

impl EndReason {
    pub fn label(self) -> &'static str {
        match self {
            EndReason::NoLegalMoves => "no_legal_moves",
            EndReason::Timeout => "timeout",
            EndReason::IllegalMove => "illegal_move",
        }
    }
}

/// 1手分の記録
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRecord {
    /// 開始局面からの手数（1始まり）
    pub ply: u32,
    pub player: Player,
    pub mv: Move,
    pub elapsed_ms: f64,
}

/// 対局結果
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub winner: Player,
    pub reason: EndReason,
    /// 開始局面から指された手数（反則手を含む）
    pub plies: u32,
    pub history: Vec<MoveRecord>,
}

impl GameResult {
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

/// `board` から1局を指し切る
///
/// - `first`, `second`: 先手・後手のエージェント
/// - `time_limit_ms`: 1手あたりの持ち時間
pub fn play_game(
    first: &mut dyn Agent<Board>,
    second: &mut dyn Agent<Board>,
    board: Board,
    time_limit_ms: u64,
) -> GameResult {
    let limit = Duration::from_millis(time_limit_ms);
    let mut board = board;
    let mut history: Vec<MoveRecord> = Vec::new();

    let (loser, reason) = loop {
        let side = board.active_player();
        if board.legal_moves().is_empty() {
            break (side, EndReason::NoLegalMoves);
        }

        let agent: &mut dyn Agent<Board> = match side {
            Player::First => &mut *first,
            Player::Second => &mut *second,
        };
        let countdown = Countdown::start(limit);
        let mv = agent.select_move(&board, &countdown);
        let elapsed = countdown.elapsed();

        history.push(MoveRecord {
            ply: history.len() as u32 + 1,
            player: side,
            mv,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        });

        if elapsed > countdown.limit() {
            warn!(
                "{side:?} exceeded the time limit: {:.1}ms > {time_limit_ms}ms",
                elapsed.as_secs_f64() * 1000.0
            );
            break (side, EndReason::Timeout);
        }
        if let Err(e) = board.apply_move(mv) {
            warn!("{side:?} forfeits: {e}");
            break (side, EndReason::IllegalMove);
        }
    };

    debug!(
        "game over after {} plies: {:?} wins by {}",
        history.len(),
        loser.opponent(),
        reason.label()
    );

    GameResult {
        winner: loser.opponent(),
        reason,
        plies: history.len() as u32,
        history,
    }
}
