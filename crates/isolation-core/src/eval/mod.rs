//! 静的評価
//!
//! 非終端局面を `player` の視点で採点する。評価関数は `Evaluator` トレイトを満たせば差し替え可能で、
//! `Fn(&P, Player) -> Score` のクロージャもそのまま使える。
//!
//! 組み込みのポリシー:
//! - [`MobilityCentrality`]: 機動力の差 + 中央への近さ（手数で減衰）
//! - [`Mobility`]: 機動力の差のみ
//! - [`PhaseWeighted`]: 盤の埋まり具合で重みを切り替える

mod centrality;
mod mobility;
mod phase;

pub use centrality::{CENTRALITY_WEIGHT, MobilityCentrality};
pub use mobility::Mobility;
pub use phase::{GamePhase, PhaseWeighted};

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Player, Score};

/// 評価関数
pub trait Evaluator<P: Position> {
    /// `player` から見た `pos` の評価値
    fn evaluate(&self, pos: &P, player: Player) -> Score;
}

impl<P, F> Evaluator<P> for F
where
    P: Position,
    F: Fn(&P, Player) -> Score,
{
    #[inline]
    fn evaluate(&self, pos: &P, player: Player) -> Score {
        self(pos, player)
    }
}

/// 設定ファイル/CLIから選択する評価ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalPolicy {
    #[default]
    MobilityCentrality,
    Mobility,
    PhaseWeighted,
}

impl EvalPolicy {
    /// 全ポリシー
    pub const ALL: [EvalPolicy; 3] = [
        EvalPolicy::MobilityCentrality,
        EvalPolicy::Mobility,
        EvalPolicy::PhaseWeighted,
    ];

    /// 設定上の名前
    pub const fn name(self) -> &'static str {
        match self {
            EvalPolicy::MobilityCentrality => "mobility-centrality",
            EvalPolicy::Mobility => "mobility",
            EvalPolicy::PhaseWeighted => "phase-weighted",
        }
    }
}

impl std::fmt::Display for EvalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EvalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvalPolicy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown eval policy: {s}"))
    }
}

impl<P: Position> Evaluator<P> for EvalPolicy {
    #[inline]
    fn evaluate(&self, pos: &P, player: Player) -> Score {
        match self {
            EvalPolicy::MobilityCentrality => MobilityCentrality.evaluate(pos, player),
            EvalPolicy::Mobility => Mobility.evaluate(pos, player),
            EvalPolicy::PhaseWeighted => PhaseWeighted.evaluate(pos, player),
        }
    }
}

/// 勝敗が確定していれば ±∞ を返す
#[inline]
pub(crate) fn terminal_score<P: Position>(pos: &P, player: Player) -> Option<Score> {
    if pos.is_loser(player) {
        Some(Score::LOSS)
    } else if pos.is_winner(player) {
        Some(Score::WIN)
    } else {
        None
    }
}

/// 双方の合法手の数 `(自分, 相手)`
#[inline]
pub(crate) fn mobility_counts<P: Position>(pos: &P, player: Player) -> (f64, f64) {
    let my_moves = pos.legal_moves_for(player).len() as f64;
    let opp_moves = pos.legal_moves_for(pos.opponent(player)).len() as f64;
    (my_moves, opp_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Board;
    use crate::types::Move;

    /// 先手が動けなくなった局面（後手の勝ち）
    fn finished_board() -> Board {
        let mut board = Board::new(3, 2).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(1, 2)).unwrap();
        board
    }

    #[test]
    fn test_terminal_scoring() {
        let board = finished_board();
        for policy in [EvalPolicy::MobilityCentrality, EvalPolicy::PhaseWeighted] {
            assert_eq!(policy.evaluate(&board, Player::First), Score::LOSS, "{policy}");
            assert_eq!(policy.evaluate(&board, Player::Second), Score::WIN, "{policy}");
        }
        // 機動力のみのポリシーは終局を特別扱いしない
        let score = EvalPolicy::Mobility.evaluate(&board, Player::First);
        assert!(score.is_finite());
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in EvalPolicy::ALL {
            assert_eq!(policy.name().parse::<EvalPolicy>(), Ok(policy));
        }
        assert!("material".parse::<EvalPolicy>().is_err());
        assert_eq!(EvalPolicy::default(), EvalPolicy::MobilityCentrality);
    }

    #[test]
    fn test_closure_is_evaluator() {
        let constant = |_: &Board, _: Player| Score::new(4.0);
        assert_eq!(constant.evaluate(&Board::default(), Player::First), Score::new(4.0));
    }
}
