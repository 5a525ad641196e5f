//! alpha-beta 探索
//!
//! fail-hard 型の alpha-beta。値関数は値と、その値を与えた指し手の組を返す。
//! 指し手が必要なのはルートだけだが、カットは再帰の内側で起きるので
//! すべての戻り値に指し手を通しておく。

use log::trace;

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Move, Player, Score};

use super::deadline::{Deadline, SearchTimeout};
use super::search_helpers::SearchContext;
use super::stats::SearchStats;

/// alpha-beta 探索器
pub struct AlphaBeta<'a, E> {
    ctx: SearchContext<'a, E>,
}

impl<'a, E> AlphaBeta<'a, E> {
    /// `player` の視点で評価する探索器を作る
    pub fn new(evaluator: &'a E, deadline: Deadline<'a>, player: Player) -> Self {
        AlphaBeta {
            ctx: SearchContext::new(evaluator, deadline, player),
        }
    }

    /// これまでの探索統計（反復深化では全深さの合計）
    pub fn stats(&self) -> &SearchStats {
        &self.ctx.stats
    }

    pub(super) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.ctx.stats
    }

    /// 窓 `(-∞, +∞)` で探索し、最善手だけを返す
    ///
    /// 合法手がない、またはすべての手が負け確定のときは `Move::NONE`。
    pub fn search<P>(&mut self, pos: &P, depth: i32) -> Result<Move, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.search_window(pos, depth, Score::LOSS, Score::WIN)
    }

    /// 窓を指定して探索し、最善手だけを返す
    ///
    /// `alpha <= beta` でなければならない（デバッグビルドで検査）。
    pub fn search_window<P>(
        &mut self,
        pos: &P,
        depth: i32,
        alpha: Score,
        beta: Score,
    ) -> Result<Move, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        debug_assert!(alpha <= beta, "inverted window ({alpha}, {beta})");
        self.ctx.check_time()?;
        let cutoffs_before = self.ctx.stats.cutoffs;
        let (_, mv) = self.max_value(pos, depth, alpha, beta)?;
        trace!(
            "alphabeta depth={depth} move={mv} cutoffs={}",
            self.ctx.stats.cutoffs - cutoffs_before
        );
        Ok(mv)
    }

    fn max_value<P>(
        &mut self,
        pos: &P,
        depth: i32,
        mut alpha: Score,
        beta: Score,
    ) -> Result<(Score, Move), SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.ctx.check_time()?;
        self.ctx.stats.nodes += 1;
        if self.ctx.is_terminal(pos, depth)? {
            return Ok((self.ctx.evaluate(pos), Move::NONE));
        }
        debug_assert!(alpha <= beta, "alpha {alpha} > beta {beta}");

        let mut value = Score::LOSS;
        let mut best_move = Move::NONE;
        for mv in pos.legal_moves() {
            let (child, _) = self.min_value(&pos.forecast(mv), depth - 1, alpha, beta)?;
            if child > value {
                value = child;
                best_move = mv;
            }
            // beta カット
            if value >= beta {
                self.ctx.stats.cutoffs += 1;
                return Ok((value, best_move));
            }
            alpha = alpha.max(value);
        }
        Ok((value, best_move))
    }

    fn min_value<P>(
        &mut self,
        pos: &P,
        depth: i32,
        alpha: Score,
        mut beta: Score,
    ) -> Result<(Score, Move), SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.ctx.check_time()?;
        self.ctx.stats.nodes += 1;
        if self.ctx.is_terminal(pos, depth)? {
            return Ok((self.ctx.evaluate(pos), Move::NONE));
        }
        debug_assert!(alpha <= beta, "alpha {alpha} > beta {beta}");

        let mut value = Score::WIN;
        let mut best_move = Move::NONE;
        for mv in pos.legal_moves() {
            let (child, _) = self.max_value(&pos.forecast(mv), depth - 1, alpha, beta)?;
            if child < value {
                value = child;
                best_move = mv;
            }
            // alpha カット
            if value <= alpha {
                self.ctx.stats.cutoffs += 1;
                return Ok((value, best_move));
            }
            beta = beta.min(value);
        }
        Ok((value, best_move))
    }
}
