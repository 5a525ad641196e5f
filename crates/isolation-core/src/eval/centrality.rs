//! 機動力 + 中央寄り評価

use super::{Evaluator, mobility_counts, terminal_score};
use crate::position::Position;
use crate::types::{Player, Score};

/// 中央距離項の重み
pub const CENTRALITY_WEIGHT: f64 = 0.6;

/// 機動力の差に、中央からの距離の差を手数で割った項を加える
///
/// `(my - opp) + 0.6 * (opp_d² - my_d²) / move_count`
///
/// - `d²` は `(height/2, width/2)` からのユークリッド距離の二乗（実数）
/// - `move_count == 0` では距離項を加えず、機動力の差だけを返す
/// - 未配置のプレイヤーの `d²` は 0 として扱う
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilityCentrality;

impl MobilityCentrality {
    fn distance_sq<P: Position>(pos: &P, player: Player) -> f64 {
        let Some(loc) = pos.player_location(player) else {
            return 0.0;
        };
        let center_row = pos.height() as f64 / 2.0;
        let center_col = pos.width() as f64 / 2.0;
        let dr = center_row - f64::from(loc.row());
        let dc = center_col - f64::from(loc.col());
        dr * dr + dc * dc
    }
}

impl<P: Position> Evaluator<P> for MobilityCentrality {
    fn evaluate(&self, pos: &P, player: Player) -> Score {
        if let Some(score) = terminal_score(pos, player) {
            return score;
        }
        let (my_moves, opp_moves) = mobility_counts(pos, player);
        let mobility = my_moves - opp_moves;
        let move_count = pos.move_count();
        if move_count == 0 {
            return Score::new(mobility);
        }
        let my_dist = Self::distance_sq(pos, player);
        let opp_dist = Self::distance_sq(pos, pos.opponent(player));
        Score::new(mobility + (opp_dist - my_dist) * CENTRALITY_WEIGHT / f64::from(move_count))
    }
}
