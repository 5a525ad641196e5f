//! 探索ヘルパー
//!
//! 中断チェック、終端判定、葉の評価。minimax / alpha-beta の両方から使う。

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Player, Score};

use super::deadline::{Deadline, SearchTimeout};
use super::stats::SearchStats;

/// 1回の探索呼び出しで共有する状態
pub(super) struct SearchContext<'a, E> {
    evaluator: &'a E,
    deadline: Deadline<'a>,
    /// 評価する側（ルート局面の手番）
    player: Player,
    pub(super) stats: SearchStats,
}

impl<'a, E> SearchContext<'a, E> {
    pub(super) fn new(evaluator: &'a E, deadline: Deadline<'a>, player: Player) -> Self {
        SearchContext {
            evaluator,
            deadline,
            player,
            stats: SearchStats::default(),
        }
    }

    // =========================================================================
    // 中断チェック
    // =========================================================================

    /// 残り時間が閾値未満なら `SearchTimeout`
    #[inline]
    pub(super) fn check_time(&self) -> Result<(), SearchTimeout> {
        self.deadline.check()
    }

    // =========================================================================
    // 終端判定
    // =========================================================================

    /// 深さを使い切ったか、手番側に合法手がなければ終端
    ///
    /// 合法手の生成は盤が大きいと重いので、先に中断チェックを挟む。
    #[inline]
    pub(super) fn is_terminal<P: Position>(
        &self,
        pos: &P,
        depth: i32,
    ) -> Result<bool, SearchTimeout> {
        self.check_time()?;
        Ok(depth <= 0 || pos.legal_moves().is_empty())
    }

    // =========================================================================
    // 評価
    // =========================================================================

    /// 探索している側から見た静的評価
    #[inline]
    pub(super) fn evaluate<P>(&mut self, pos: &P) -> Score
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(pos, self.player)
    }
}
