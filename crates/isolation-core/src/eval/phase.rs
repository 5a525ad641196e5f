//! 序盤/中盤/終盤で重みを切り替える評価

use super::{Evaluator, mobility_counts, terminal_score};
use crate::position::Position;
use crate::types::{Player, Score};

/// 盤の埋まり具合による局面の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// 20% 未満
    Opening,
    /// 20% 以上 50% 未満
    Midgame,
    /// 50% 以上
    Endgame,
}

impl GamePhase {
    /// `move_count / (width * height) * 100` から段階を決める
    pub fn from_position<P: Position>(pos: &P) -> GamePhase {
        let squares = (pos.width() * pos.height()) as f64;
        let filled = f64::from(pos.move_count()) / squares * 100.0;
        if filled < 20.0 {
            GamePhase::Opening
        } else if filled < 50.0 {
            GamePhase::Midgame
        } else {
            GamePhase::Endgame
        }
    }
}

/// 段階別の重み付き評価
///
/// - 序盤: `2*my - 0.5*boxes`
/// - 中盤: `3*my - opp - 0.5*boxes`
/// - 終盤: `2*my - opp`
///
/// `boxes = |col - ceil(w/2)| + |row - ceil(h/2)| - 1`（中央までのマンハッタン距離）。
/// 未配置のプレイヤーは `boxes = 0` とする。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseWeighted;

impl PhaseWeighted {
    fn boxes_to_center<P: Position>(pos: &P, player: Player) -> f64 {
        let Some(loc) = pos.player_location(player) else {
            return 0.0;
        };
        let center_col = pos.width().div_ceil(2) as i64;
        let center_row = pos.height().div_ceil(2) as i64;
        let boxes = (i64::from(loc.col()) - center_col).abs()
            + (i64::from(loc.row()) - center_row).abs()
            - 1;
        boxes as f64
    }
}

impl<P: Position> Evaluator<P> for PhaseWeighted {
    fn evaluate(&self, pos: &P, player: Player) -> Score {
        if let Some(score) = terminal_score(pos, player) {
            return score;
        }
        let (my_moves, opp_moves) = mobility_counts(pos, player);
        let value = match GamePhase::from_position(pos) {
            GamePhase::Opening => 2.0 * my_moves - 0.5 * Self::boxes_to_center(pos, player),
            GamePhase::Midgame => {
                3.0 * my_moves - opp_moves - 0.5 * Self::boxes_to_center(pos, player)
            }
            GamePhase::Endgame => 2.0 * my_moves - opp_moves,
        };
        Score::new(value)
    }
}
