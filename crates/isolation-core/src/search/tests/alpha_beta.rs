//! alpha-beta のテスト

use super::support::*;
use crate::agent::AlphaBetaPlayer;
use crate::position::Board;
use crate::search::{AlphaBeta, Deadline, Minimax, SearchConfig, SearchTimeout};
use crate::types::{Move, Player, Score};

fn classic_tree() -> TreePosition {
    TreePosition::new(node(vec![
        leaves(&[3.0, 12.0, 8.0]),
        leaves(&[2.0, 4.0, 6.0]),
        leaves(&[14.0, 5.0, 2.0]),
    ]))
}

#[test]
fn test_alphabeta_classic_tree_prunes_siblings() {
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    let mv = searcher.search(&classic_tree(), 2).unwrap();
    assert_eq!(mv, Move::new(0, 0));
    // 2番目の子は最初の葉 2 <= alpha(3) でカットされ、4 と 6 は評価されない
    assert_eq!(eval.seen(), vec![2, 3, 4, 6, 10, 11, 12]);
    assert_eq!(searcher.stats().evaluations, 7);
    assert_eq!(searcher.stats().cutoffs, 2);
}

#[test]
fn test_beta_cutoff_skips_remaining_siblings() {
    // 根(max) → A(min) → 3手。A の2番目の子 a2(max) の最初の葉で beta を上回る
    //
    //              root
    //            /      \
    //          A          B
    //       /  |  \       |
    //     a1   a2   a3    b1
    //     |   / | \   |    |
    //     4  6  1  1  7    5
    let pos = TreePosition::new(node(vec![
        node(vec![leaves(&[4.0]), leaves(&[6.0, 1.0, 1.0]), leaves(&[7.0])]),
        node(vec![leaves(&[5.0])]),
    ]));
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    let mv = searcher.search(&pos, 3).unwrap();

    // A = min(4, max(6,..), 7) = 4。a2 では 6 >= beta(4) で残り2つの葉を飛ばす
    // B = 5 なので B を選ぶ
    assert_eq!(mv, Move::new(0, 1));
    let seen = eval.seen();
    assert!(seen.contains(&5), "first leaf of a2 should be evaluated: {seen:?}");
    assert!(!seen.contains(&6) && !seen.contains(&7), "siblings after cutoff: {seen:?}");
    assert!(searcher.stats().cutoffs >= 1);
}

#[test]
fn test_alphabeta_no_legal_moves_returns_none_without_recursing() {
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    let mv = searcher.search(&TreePosition::new(leaf(1.0)), 4).unwrap();
    assert!(mv.is_none());
    // 根で終端判定して評価するだけ
    assert_eq!(searcher.stats().nodes, 1);
    assert_eq!(eval.seen(), vec![0]);
}

#[test]
fn test_alphabeta_all_losing_returns_none() {
    let clock = ScriptedClock::unlimited();
    let pos = TreePosition::new(leaves(&[f64::NEG_INFINITY, f64::NEG_INFINITY]));
    let mut searcher = AlphaBeta::new(&tree_value, Deadline::new(&clock, 10.0), Player::First);
    assert_eq!(searcher.search(&pos, 1), Ok(Move::NONE));
}

#[test]
fn test_alphabeta_forced_win_cuts_immediately() {
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let pos = TreePosition::new(leaves(&[1.0, f64::INFINITY, 50.0]));
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    assert_eq!(searcher.search(&pos, 1), Ok(Move::new(0, 1)));
    // +∞ >= beta(+∞) でカットされ、3番目の葉は評価しない
    assert_eq!(eval.seen(), vec![1, 2]);
}

#[test]
fn test_alphabeta_timeout_propagates() {
    let pos = classic_tree();
    for budget in [0, 1, 4, 10] {
        let clock = ScriptedClock::new(budget);
        let mut searcher =
            AlphaBeta::new(&tree_value, Deadline::new(&clock, 10.0), Player::First);
        assert_eq!(searcher.search(&pos, 2), Err(SearchTimeout), "budget {budget}");
    }
}

#[test]
fn test_alphabeta_matches_minimax_on_random_trees() {
    for seed in 0..300u64 {
        let mut rng = seeded(seed);
        let pos = TreePosition::new(random_shape(&mut rng, 5));
        for depth in 1..=5 {
            let clock = ScriptedClock::unlimited();
            let mut mm = Minimax::new(&tree_value, Deadline::new(&clock, 10.0), Player::First);
            let (mm_value, mm_move) = mm.search_with_value(&pos, depth).unwrap();

            let mut ab = AlphaBeta::new(&tree_value, Deadline::new(&clock, 10.0), Player::First);
            let ab_move = ab.search(&pos, depth).unwrap();

            if mm_value == Score::LOSS {
                assert!(ab_move.is_none(), "seed {seed} depth {depth}");
            } else {
                assert_eq!(ab_move, mm_move, "seed {seed} depth {depth}");
            }
            if mm_move.is_some() {
                assert!(ab.stats().evaluations <= mm.stats().evaluations);
            }
        }
    }
}

#[test]
fn test_alphabeta_player_single_depth() {
    let mut board = Board::default();
    board.apply_move(Move::new(3, 3)).unwrap();
    board.apply_move(Move::new(1, 1)).unwrap();
    let clock = || 1_000.0;

    let mut player = AlphaBetaPlayer::with_seed(SearchConfig::default(), 1);
    let mv = player.alphabeta(&board, 3, &clock).unwrap();
    assert!(mv.is_some());
    assert!(player.last_stats().nodes > 0);

    let expired = || 0.0;
    assert_eq!(player.alphabeta(&board, 3, &expired), Err(SearchTimeout));
}

#[test]
fn test_narrow_window_returns_bound_move() {
    // 窓 (3, 4): A=3 は子側で alpha カット、B=4 で根が beta カットし C は読まない
    let pos = TreePosition::new(node(vec![leaves(&[3.0]), leaves(&[4.0]), leaves(&[9.0])]));
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    let mv = searcher
        .search_window(&pos, 2, Score::new(3.0), Score::new(4.0))
        .unwrap();
    assert_eq!(mv, Move::new(0, 1));
    assert_eq!(eval.seen(), vec![2, 4]);
    assert_eq!(searcher.stats().cutoffs, 2);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "inverted window")]
fn test_inverted_window_is_rejected() {
    let clock = ScriptedClock::unlimited();
    let eval = RecordingEval::default();
    let mut searcher = AlphaBeta::new(&eval, Deadline::new(&clock, 10.0), Player::First);
    let _ = searcher.search_window(&classic_tree(), 2, Score::new(5.0), Score::new(1.0));
}
