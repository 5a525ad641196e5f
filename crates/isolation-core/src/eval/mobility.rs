//! 機動力評価

use super::{Evaluator, mobility_counts};
use crate::position::Position;
use crate::types::{Player, Score};

/// `自分の合法手数 - 相手の合法手数`
///
/// 終局を特別扱いしないため、常に有限値を返す。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mobility;

impl<P: Position> Evaluator<P> for Mobility {
    #[inline]
    fn evaluate(&self, pos: &P, player: Player) -> Score {
        let (my_moves, opp_moves) = mobility_counts(pos, player);
        Score::new(my_moves - opp_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Board;
    use crate::types::Move;

    #[test]
    fn test_mobility_difference() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3)).unwrap(); // 中央: 8方向
        board.apply_move(Move::new(0, 0)).unwrap(); // 隅: 2方向
        assert_eq!(Mobility.evaluate(&board, Player::First), Score::new(6.0));
        assert_eq!(Mobility.evaluate(&board, Player::Second), Score::new(-6.0));
    }

    #[test]
    fn test_mobility_on_empty_board_is_zero() {
        // どちらも未配置なので、双方とも全空きマスが合法手
        let board = Board::default();
        assert_eq!(Mobility.evaluate(&board, Player::First), Score::ZERO);
    }
}
