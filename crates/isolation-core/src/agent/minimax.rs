//! 固定深さ minimax エージェント

use log::debug;

use super::Agent;
use crate::eval::{EvalPolicy, Evaluator};
use crate::position::Position;
use crate::search::{Clock, Deadline, Minimax, SearchConfig, SearchStats, SearchTimeout};
use crate::types::Move;

/// 設定された深さの minimax で着手を選ぶエージェント
///
/// 探索そのものは時間切れを回収しない。`get_move` がその回収点で、
/// 時間切れなら `Move::NONE` を返す。
#[derive(Debug, Clone)]
pub struct MinimaxPlayer<E = EvalPolicy> {
    config: SearchConfig,
    evaluator: E,
    last_stats: SearchStats,
}

impl MinimaxPlayer<EvalPolicy> {
    /// `config.eval` の評価ポリシーで作る
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, config.eval)
    }
}

impl<E> MinimaxPlayer<E> {
    /// 任意の評価関数で作る（`config.eval` は使わない）
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        MinimaxPlayer {
            config,
            evaluator,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 直前の探索の統計
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// `depth` 手読みの minimax。時間切れはそのまま返す。
    pub fn minimax<P>(
        &mut self,
        pos: &P,
        depth: u32,
        clock: &dyn Clock,
    ) -> Result<Move, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        let deadline = Deadline::new(clock, self.config.timeout_ms);
        let mut searcher = Minimax::new(&self.evaluator, deadline, pos.active_player());
        let result = searcher.search(pos, depth as i32);
        self.last_stats = *searcher.stats();
        result
    }

    /// 設定の深さで着手を選ぶ。時間切れなら `Move::NONE`。
    pub fn get_move<P>(&mut self, pos: &P, clock: &dyn Clock) -> Move
    where
        P: Position,
        E: Evaluator<P>,
    {
        match self.minimax(pos, self.config.search_depth, clock) {
            Ok(mv) => mv,
            Err(timeout) => {
                debug!("minimax depth {}: {timeout}", self.config.search_depth);
                Move::NONE
            }
        }
    }
}

impl<P, E> Agent<P> for MinimaxPlayer<E>
where
    P: Position,
    E: Evaluator<P>,
{
    fn select_move(&mut self, pos: &P, clock: &dyn Clock) -> Move {
        self.get_move(pos, clock)
    }
}
