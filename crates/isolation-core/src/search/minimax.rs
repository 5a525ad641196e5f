//! 固定深さ minimax
//!
//! 枝刈りなしで指定の深さまで全展開する。
//! 時間切れは `SearchTimeout` としてそのまま呼び出し元へ返し、ここでは回収しない。

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Move, Player, Score};

use super::deadline::{Deadline, SearchTimeout};
use super::search_helpers::SearchContext;
use super::stats::SearchStats;

/// 固定深さ minimax 探索器
pub struct Minimax<'a, E> {
    ctx: SearchContext<'a, E>,
}

impl<'a, E> Minimax<'a, E> {
    /// `player` の視点で評価する探索器を作る
    pub fn new(evaluator: &'a E, deadline: Deadline<'a>, player: Player) -> Self {
        Minimax {
            ctx: SearchContext::new(evaluator, deadline, player),
        }
    }

    /// これまでの探索統計
    pub fn stats(&self) -> &SearchStats {
        &self.ctx.stats
    }

    /// 最善手を返す。合法手がなければ `Move::NONE`。
    ///
    /// 同じ値の手が複数あるときは、列挙順で最初の手を選ぶ。
    pub fn search<P>(&mut self, pos: &P, depth: i32) -> Result<Move, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.search_with_value(pos, depth).map(|(_, mv)| mv)
    }

    /// 最善手とその値を返す。合法手がなければ `(Score::LOSS, Move::NONE)`。
    pub fn search_with_value<P>(
        &mut self,
        pos: &P,
        depth: i32,
    ) -> Result<(Score, Move), SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.ctx.check_time()?;

        let mut best: Option<(Score, Move)> = None;
        for mv in pos.legal_moves() {
            let value = self.min_value(&pos.forecast(mv), depth - 1)?;
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, mv));
            }
        }
        Ok(best.unwrap_or((Score::LOSS, Move::NONE)))
    }

    fn max_value<P>(&mut self, pos: &P, depth: i32) -> Result<Score, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.ctx.check_time()?;
        self.ctx.stats.nodes += 1;
        if self.ctx.is_terminal(pos, depth)? {
            return Ok(self.ctx.evaluate(pos));
        }
        let mut value = Score::LOSS;
        for mv in pos.legal_moves() {
            value = value.max(self.min_value(&pos.forecast(mv), depth - 1)?);
        }
        Ok(value)
    }

    fn min_value<P>(&mut self, pos: &P, depth: i32) -> Result<Score, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.ctx.check_time()?;
        self.ctx.stats.nodes += 1;
        if self.ctx.is_terminal(pos, depth)? {
            return Ok(self.ctx.evaluate(pos));
        }
        let mut value = Score::WIN;
        for mv in pos.legal_moves() {
            value = value.min(self.max_value(&pos.forecast(mv), depth - 1)?);
        }
        Ok(value)
    }
}
