//! 反復深化 alpha-beta エージェント

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Agent, random_move};
use crate::eval::{EvalPolicy, Evaluator};
use crate::position::Position;
use crate::search::{
    AlphaBeta, Clock, Deadline, IterativeOutcome, SearchConfig, SearchStats, SearchTimeout,
    iterative_deepening,
};
use crate::types::Move;

/// 反復深化 alpha-beta で着手を選ぶエージェント
///
/// 探索前に合法手から一様ランダムに暫定手を選んでおくので、
/// 深さ1すら完了しなくても合法手を返せる。乱数源は差し替え可能。
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer<E = EvalPolicy, R = Xoshiro256PlusPlus> {
    config: SearchConfig,
    evaluator: E,
    rng: R,
    last_stats: SearchStats,
    last_outcome: Option<IterativeOutcome>,
}

impl AlphaBetaPlayer<EvalPolicy, Xoshiro256PlusPlus> {
    /// `config.eval` の評価ポリシーで作り、乱数はOSからシードする
    pub fn new(config: SearchConfig) -> Self {
        Self::with_parts(config, config.eval, Xoshiro256PlusPlus::from_os_rng())
    }

    /// 再現可能なシードで作る
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_parts(config, config.eval, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<E, R: Rng> AlphaBetaPlayer<E, R> {
    /// 評価関数と乱数源を指定して作る（`config.eval` は使わない）
    pub fn with_parts(config: SearchConfig, evaluator: E, rng: R) -> Self {
        AlphaBetaPlayer {
            config,
            evaluator,
            rng,
            last_stats: SearchStats::default(),
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 直前の探索の統計
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// 直前の `get_move` の結果
    pub fn last_outcome(&self) -> Option<&IterativeOutcome> {
        self.last_outcome.as_ref()
    }

    /// 深さ `depth` の alpha-beta を1回だけ行う。時間切れはそのまま返す。
    pub fn alphabeta<P>(
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
        let mut searcher = AlphaBeta::new(&self.evaluator, deadline, pos.active_player());
        let result = searcher.search(pos, depth as i32);
        self.last_stats = *searcher.stats();
        result
    }

    /// 時間切れまで深さを増やしながら探索し、最後に完了した深さの最善手を返す
    pub fn get_move<P>(&mut self, pos: &P, clock: &dyn Clock) -> Move
    where
        P: Position,
        E: Evaluator<P>,
    {
        let provisional = random_move(pos, &mut self.rng);
        let deadline = Deadline::new(clock, self.config.timeout_ms);
        let mut searcher = AlphaBeta::new(&self.evaluator, deadline, pos.active_player());
        let outcome = iterative_deepening(&mut searcher, pos, provisional, self.config.max_depth);
        self.last_stats = *searcher.stats();
        self.last_outcome = Some(outcome);
        outcome.best_move
    }
}

impl<P, E, R> Agent<P> for AlphaBetaPlayer<E, R>
where
    P: Position,
    E: Evaluator<P>,
    R: Rng,
{
    fn select_move(&mut self, pos: &P, clock: &dyn Clock) -> Move {
        self.get_move(pos, clock)
    }
}
