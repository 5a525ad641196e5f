//! 反復深化
//!
//! 深さ 1, 2, 3, … と alpha-beta を繰り返し、時間切れになった時点で
//! 最後に完了した深さの最善手を返す（anytime）。
//! 途中で打ち切られた深さの結果は `?` で巻き戻るため、採用されることはない。

use log::debug;

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::Move;

use super::alpha_beta::AlphaBeta;

/// 反復深化の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeOutcome {
    /// 最善手（どの深さも完了しなければ暫定手のまま）
    pub best_move: Move,
    /// 最後に完了した深さ（0 = 未完了）
    pub completed_depth: u32,
    /// 時間切れで終了したか
    pub timed_out: bool,
}

/// `provisional` を暫定の最善手として反復深化する
///
/// - `Move::NONE` が返った深さで終了し、直前の最善手を保つ
/// - `max_depth` が `Some` ならその深さを完了した時点で終了する（`None` は無制限）
pub fn iterative_deepening<P, E>(
    searcher: &mut AlphaBeta<'_, E>,
    pos: &P,
    provisional: Move,
    max_depth: Option<u32>,
) -> IterativeOutcome
where
    P: Position,
    E: Evaluator<P>,
{
    let mut outcome = IterativeOutcome {
        best_move: provisional,
        completed_depth: 0,
        timed_out: false,
    };

    let mut depth: u32 = 1;
    loop {
        if max_depth.is_some_and(|max| depth > max) {
            break;
        }
        match searcher.search(pos, depth as i32) {
            Ok(mv) if mv.is_none() => {
                debug!("depth {depth}: no improving move, keeping {}", outcome.best_move);
                break;
            }
            Ok(mv) => {
                outcome.best_move = mv;
                outcome.completed_depth = depth;
                searcher.stats_mut().completed_depth = depth;
                debug!(
                    "depth {depth} completed: best={mv} nodes={}",
                    searcher.stats().nodes
                );
            }
            Err(timeout) => {
                debug!(
                    "depth {depth} aborted ({timeout}), returning depth {} move {}",
                    outcome.completed_depth, outcome.best_move
                );
                outcome.timed_out = true;
                break;
            }
        }
        depth += 1;
    }
    outcome
}
