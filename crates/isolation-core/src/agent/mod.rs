//! エージェント
//!
//! 対局ハーネスから見た着手選択の入口。`select_move` は決して失敗せず、
//! 時間切れはこの境界で回収して「その時点の最善手」か `Move::NONE` に変換する。

mod alpha_beta;
mod minimax;

pub use alpha_beta::AlphaBetaPlayer;
pub use minimax::MinimaxPlayer;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::position::Position;
use crate::search::Clock;
use crate::types::Move;

/// 着手を選ぶエージェント
pub trait Agent<P: Position> {
    /// `pos` の手番側の着手を選ぶ。合法手がなければ `Move::NONE`。
    fn select_move(&mut self, pos: &P, clock: &dyn Clock) -> Move;
}

/// 合法手から一様ランダムに選ぶ
pub(crate) fn random_move<P: Position, R: Rng>(pos: &P, rng: &mut R) -> Move {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        Move::NONE
    } else {
        moves[rng.random_range(0..moves.len())]
    }
}

/// 合法手から一様ランダムに選ぶだけのエージェント（対局の基準用）
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl RandomPlayer<Xoshiro256PlusPlus> {
    /// OSの乱数でシードする
    pub fn new() -> Self {
        RandomPlayer {
            rng: Xoshiro256PlusPlus::from_os_rng(),
        }
    }

    /// 再現可能なシードで作る
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomPlayer { rng }
    }
}

impl<P: Position, R: Rng> Agent<P> for RandomPlayer<R> {
    fn select_move(&mut self, pos: &P, _clock: &dyn Clock) -> Move {
        random_move(pos, &mut self.rng)
    }
}
