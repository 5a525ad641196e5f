//! 指し手（Move）
//!
//! 指し手は移動先の座標 `(row, col)` だけで表す。
//! `Move::NONE` は「合法手なし」または「1手も評価できずに探索が打ち切られた」ことを示す。

use smallvec::SmallVec;

/// 合法手リスト
///
/// ナイト移動は最大8方向なのでインライン領域に収まる。
/// 初手の配置（任意の空きマス）だけがヒープに溢れる。
pub type MoveList = SmallVec<[Move; 8]>;

/// 指し手（移動先の座標）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    row: i8,
    col: i8,
}

impl Move {
    /// 指し手なし
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// 座標から生成
    #[inline]
    pub const fn new(row: i8, col: i8) -> Move {
        Move { row, col }
    }

    /// 行
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// 列
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// `Move::NONE` かどうか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// `Move::NONE` 以外かどうか
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
