//! 手番（Player）

use serde::{Deserialize, Serialize};

/// 手番（先手/後手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 盤面表示用の記号
    #[inline]
    pub const fn mark(self) -> char {
        match self {
            Player::First => '1',
            Player::Second => '2',
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}
