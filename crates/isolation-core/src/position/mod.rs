//! 局面
//!
//! 探索は局面を `Position` トレイト越しにしか触らない。
//! 局面は不変値として扱い、`forecast` は常に新しい子局面を返す（元の局面は変更しない）。

mod board;

pub use board::{Board, BoardError, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::types::{Move, MoveList, Player};

/// 探索対象の局面
///
/// 二人零和・完全情報ゲームの局面を表す。合法性の判定や盤面表現は実装側の責務。
pub trait Position: Clone {
    /// 手番のプレイヤー
    fn active_player(&self) -> Player;

    /// 指定プレイヤーの合法手
    fn legal_moves_for(&self, player: Player) -> MoveList;

    /// 手番側の合法手
    #[inline]
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// `mv` を指した後の局面を返す（`self` は変更しない）
    fn forecast(&self, mv: Move) -> Self;

    /// `player` の勝ちが確定しているか
    fn is_winner(&self, player: Player) -> bool;

    /// `player` の負けが確定しているか
    fn is_loser(&self, player: Player) -> bool;

    /// `player` の相手
    #[inline]
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// プレイヤーの現在位置（未配置なら `None`）
    fn player_location(&self, player: Player) -> Option<Move>;

    /// 盤の幅
    fn width(&self) -> usize;

    /// 盤の高さ
    fn height(&self) -> usize;

    /// これまでに指された手数
    fn move_count(&self) -> u32;
}
